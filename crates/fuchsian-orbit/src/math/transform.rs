// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use super::{Point, Scalar, Tolerance};
use crate::error::OrbitError;

/// Möbius transformation `z ↦ (az + b) / (cz + d)` stored as the 2×2 matrix
/// `[a, b; c, d]`.
///
/// Invariants:
/// - The determinant `ad − bc` is non-negligible at construction (checked
///   relative to `|ad| + |bc|`, so rescaling a matrix never changes the
///   verdict).
/// - Matrices are never renormalized implicitly; [`Transformation::inverse`]
///   divides by the determinant and composition is the plain matrix product.
///
/// # Examples
/// ```
/// use fuchsian_orbit::{Point, Transformation};
/// let t = Transformation::new(1.0, 1.0, 0.0, 1.0).unwrap();
/// assert_eq!(t.apply(Point::new(0.5, 2.0)), Point::new(1.5, 2.0));
/// assert!(Transformation::new(1.0, 1.0, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation<S: Scalar = f64> {
    a: S,
    b: S,
    c: S,
    d: S,
}

/// Conjugacy class of a real transformation, read off `tr² / det`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// Acts as the identity map.
    Identity,
    /// One fixed point inside the half-plane (`tr²/det < 4`).
    Elliptic,
    /// One fixed point on the boundary (`tr²/det = 4`).
    Parabolic,
    /// Two fixed points on the boundary (`tr²/det > 4`).
    Hyperbolic,
    /// Negative determinant: swaps the upper and lower half-planes.
    OrientationReversing,
}

impl<S: Scalar> Transformation<S> {
    /// Builds a transformation, rejecting a negligible determinant under
    /// [`Tolerance::DEFAULT`].
    pub fn new(a: S, b: S, c: S, d: S) -> Result<Self, OrbitError> {
        Self::with_tolerance(a, b, c, d, Tolerance::DEFAULT)
    }

    /// Builds a transformation under an explicit tolerance.
    pub fn with_tolerance(a: S, b: S, c: S, d: S, tol: Tolerance) -> Result<Self, OrbitError> {
        let m = Self { a, b, c, d };
        m.check_invertible(tol)?;
        Ok(m)
    }

    /// The identity map `[1, 0; 0, 1]`.
    pub fn identity() -> Self {
        Self {
            a: S::one(),
            b: S::zero(),
            c: S::zero(),
            d: S::one(),
        }
    }

    /// Matrix entries in row-major order `[a, b, c, d]`.
    pub fn entries(&self) -> [S; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Top-left entry.
    pub fn a(&self) -> S {
        self.a
    }

    /// Top-right entry.
    pub fn b(&self) -> S {
        self.b
    }

    /// Bottom-left entry.
    pub fn c(&self) -> S {
        self.c
    }

    /// Bottom-right entry.
    pub fn d(&self) -> S {
        self.d
    }

    /// `ad − bc`.
    pub fn determinant(&self) -> S {
        self.a * self.d - self.b * self.c
    }

    /// `a + d`.
    pub fn trace(&self) -> S {
        self.a + self.d
    }

    fn determinant_scale(&self) -> f64 {
        (self.a * self.d).magnitude() + (self.b * self.c).magnitude()
    }

    fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    /// `true` when the determinant is negligible under `tol`.
    ///
    /// Products of long words can drift here through rounding; the word
    /// enumerator reports such elements instead of failing.
    pub fn is_near_degenerate(&self, tol: Tolerance) -> bool {
        !self.is_finite()
            || tol.is_negligible(self.determinant().magnitude(), self.determinant_scale())
    }

    fn check_invertible(&self, tol: Tolerance) -> Result<(), OrbitError> {
        if self.is_near_degenerate(tol) {
            return Err(OrbitError::DegenerateTransformation {
                determinant: self.determinant().magnitude(),
            });
        }
        Ok(())
    }

    /// Multiplies every entry by `factor`; the induced map is unchanged.
    pub fn scaled(&self, factor: S) -> Result<Self, OrbitError> {
        Self::new(
            self.a * factor,
            self.b * factor,
            self.c * factor,
            self.d * factor,
        )
    }

    /// `self ∘ other`: applies `other` first.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
        }
    }

    /// Inverse under [`Tolerance::DEFAULT`].
    pub fn inverse(&self) -> Result<Self, OrbitError> {
        self.inverse_with(Tolerance::DEFAULT)
    }

    /// Inverse `[d, −b; −c, a] / det`.
    pub fn inverse_with(&self, tol: Tolerance) -> Result<Self, OrbitError> {
        self.check_invertible(tol)?;
        let det = self.determinant();
        Ok(Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
        })
    }

    /// Acts as the identity map: `b`, `c` negligible and `a ≈ d`.
    ///
    /// Projective comparison, so `−I` also qualifies.
    pub fn is_identity(&self, tol: Tolerance) -> bool {
        let scale = self.a.magnitude().max(self.d.magnitude());
        tol.is_negligible(self.b.magnitude(), scale)
            && tol.is_negligible(self.c.magnitude(), scale)
            && tol.is_negligible((self.a - self.d).magnitude(), scale)
    }

    /// Applies the map under [`Tolerance::DEFAULT`].
    pub fn apply(&self, point: Point) -> Point {
        self.apply_with(point, Tolerance::DEFAULT)
    }

    /// Applies the map; a [`OrbitError::NumericSingularity`] is recovered as
    /// [`Point::Infinity`].
    pub fn apply_with(&self, point: Point, tol: Tolerance) -> Point {
        match self.try_apply(point, tol) {
            Ok(image) => image,
            Err(err) => {
                tracing::trace!(%point, %err, "substituting infinity");
                Point::Infinity
            }
        }
    }

    /// Applies the map, surfacing overflow as [`OrbitError::NumericSingularity`].
    ///
    /// - finite `z` with `|cz + d|` negligible against `|cz| + |d|` → `∞`
    /// - `∞` → `∞` when `c` is negligible against `|a| + |c|`, else `a / c`
    pub fn try_apply(&self, point: Point, tol: Tolerance) -> Result<Point, OrbitError> {
        let a = self.a.to_complex();
        let b = self.b.to_complex();
        let c = self.c.to_complex();
        let d = self.d.to_complex();
        let image = match point {
            Point::Infinity => {
                if tol.is_negligible(c.norm(), a.norm() + c.norm()) {
                    return Ok(Point::Infinity);
                }
                a / c
            }
            Point::Finite(z) => {
                let cz = c * z;
                let denom = cz + d;
                if tol.is_negligible(denom.norm(), cz.norm() + d.norm()) {
                    return Ok(Point::Infinity);
                }
                (a * z + b) / denom
            }
        };
        if image.is_finite() {
            Ok(Point::Finite(image))
        } else {
            Err(OrbitError::NumericSingularity("image left the finite range"))
        }
    }
}

impl Transformation<f64> {
    /// `det > 0`: the map preserves the upper half-plane.
    pub fn is_orientation_preserving(&self) -> bool {
        self.determinant() > 0.0
    }

    /// Classifies the map by its normalized trace.
    pub fn kind(&self, tol: Tolerance) -> MapKind {
        let det = self.determinant();
        if det < 0.0 {
            return MapKind::OrientationReversing;
        }
        if self.is_identity(tol) {
            return MapKind::Identity;
        }
        let normalized = self.trace() * self.trace() / det;
        if tol.approx_eq_real(normalized, 4.0) {
            MapKind::Parabolic
        } else if normalized < 4.0 {
            MapKind::Elliptic
        } else {
            MapKind::Hyperbolic
        }
    }

    /// Rescales to determinant 1 (an element of SL(2, ℝ)).
    ///
    /// Rejects negligible determinants and orientation-reversing maps.
    pub fn project_special_linear(&self, tol: Tolerance) -> Result<Self, OrbitError> {
        self.check_invertible(tol)?;
        let det = self.determinant();
        if det < 0.0 {
            return Err(OrbitError::InvalidGeneratorSet(
                "orientation-reversing generator has no SL(2,R) projection",
            ));
        }
        let k = det.sqrt().recip();
        Ok(Self {
            a: self.a * k,
            b: self.b * k,
            c: self.c * k,
            d: self.d * k,
        })
    }
}

impl<S: Scalar> Default for Transformation<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Mul for Transformation<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<S: Scalar> Mul<&Transformation<S>> for Transformation<S> {
    type Output = Self;

    fn mul(self, rhs: &Transformation<S>) -> Self::Output {
        self.compose(rhs)
    }
}

impl<S: Scalar> MulAssign for Transformation<S> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.compose(&rhs);
    }
}

impl<S: Scalar> MulAssign<&Transformation<S>> for Transformation<S> {
    fn mul_assign(&mut self, rhs: &Transformation<S>) {
        *self = self.compose(rhs);
    }
}

impl<S: Scalar> fmt::Display for Transformation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MT[{}, {}; {}, {}]", self.a, self.b, self.c, self.d)
    }
}
