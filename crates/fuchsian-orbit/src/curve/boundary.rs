// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::error::OrbitError;
use crate::math::{Point, Tolerance, Transformation};

/// Ideal point of the upper half-plane: a real number or `∞`.
///
/// Real transformations map the boundary to itself.
#[derive(Debug, Clone, Copy)]
pub enum BoundaryPoint {
    /// A point `t` of the real axis.
    Real(f64),
    /// The point at infinity.
    Infinity,
}

impl BoundaryPoint {
    /// `true` for [`BoundaryPoint::Infinity`].
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// The real coordinate, if finite.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(t) => Some(*t),
            Self::Infinity => None,
        }
    }

    /// Embeds the boundary point in the extended plane.
    pub fn to_point(&self) -> Point {
        match self {
            Self::Real(t) => Point::new(*t, 0.0),
            Self::Infinity => Point::Infinity,
        }
    }

    /// Tolerance-aware equality.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        match (self, other) {
            (Self::Infinity, Self::Infinity) => true,
            (Self::Real(s), Self::Real(t)) => tol.approx_eq_real(*s, *t),
            _ => false,
        }
    }

    /// `true` when the two points cannot be told apart at their own
    /// magnitude: `|s − t| ≤ ε·max(|s|, |t|)`. Distinct points near zero stay
    /// distinct however close they are.
    pub fn coincides(&self, other: &Self, tol: Tolerance) -> bool {
        match (self, other) {
            (Self::Infinity, Self::Infinity) => true,
            (Self::Real(s), Self::Real(t)) => tol.is_negligible(s - t, s.abs().max(t.abs())),
            _ => false,
        }
    }
}

impl PartialEq for BoundaryPoint {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<f64> for BoundaryPoint {
    fn from(t: f64) -> Self {
        Self::Real(t)
    }
}

impl fmt::Display for BoundaryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(t) => write!(f, "{t}"),
            Self::Infinity => write!(f, "∞"),
        }
    }
}

impl Transformation<f64> {
    /// Action on the boundary, in real arithmetic and with the pole rules of
    /// [`Transformation::try_apply`].
    pub fn apply_boundary(
        &self,
        x: BoundaryPoint,
        tol: Tolerance,
    ) -> Result<BoundaryPoint, OrbitError> {
        let [a, b, c, d] = self.entries();
        let image = match x {
            BoundaryPoint::Infinity => {
                if tol.is_negligible(c, a.abs() + c.abs()) {
                    return Ok(BoundaryPoint::Infinity);
                }
                a / c
            }
            BoundaryPoint::Real(t) => {
                let denom = c * t + d;
                if tol.is_negligible(denom, (c * t).abs() + d.abs()) {
                    return Ok(BoundaryPoint::Infinity);
                }
                (a * t + b) / denom
            }
        };
        if image.is_finite() {
            Ok(BoundaryPoint::Real(image))
        } else {
            Err(OrbitError::NumericSingularity(
                "boundary image left the finite range",
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn apply(m: &Transformation, x: BoundaryPoint) -> BoundaryPoint {
        m.apply_boundary(x, Tolerance::DEFAULT)
            .unwrap_or(BoundaryPoint::Real(f64::NAN))
    }

    #[test]
    fn parabolic_fixes_infinity() {
        let h = Transformation::new(1.0, 10.0, 0.0, 1.0).unwrap();
        assert_eq!(apply(&h, BoundaryPoint::Infinity), BoundaryPoint::Infinity);
        assert_eq!(apply(&h, 0.0.into()), BoundaryPoint::Real(10.0));
    }

    #[test]
    fn hyperbolic_fixes_zero_and_infinity() {
        let h = Transformation::new(5.0, 0.0, 0.0, 0.2).unwrap();
        assert_eq!(apply(&h, BoundaryPoint::Infinity), BoundaryPoint::Infinity);
        assert_eq!(apply(&h, 0.0.into()), BoundaryPoint::Real(0.0));
        assert_eq!(apply(&h, 1.0.into()), BoundaryPoint::Real(25.0));
        assert_eq!(apply(&h, (-1.0).into()), BoundaryPoint::Real(-25.0));
    }

    #[test]
    fn rotation_swaps_zero_and_infinity() {
        let s = Transformation::new(0.0, -1.0, 1.0, 0.0).unwrap();
        assert_eq!(apply(&s, 0.0.into()), BoundaryPoint::Infinity);
        assert_eq!(apply(&s, BoundaryPoint::Infinity), BoundaryPoint::Real(0.0));
        assert_eq!(apply(&s, 1.0.into()), BoundaryPoint::Real(-1.0));
        assert_eq!(apply(&s, (-1.0).into()), BoundaryPoint::Real(1.0));
    }

    #[test]
    fn coincidence_is_relative_to_magnitude() {
        let tol = Tolerance::DEFAULT;
        let tiny = BoundaryPoint::Real(5e-10);
        assert!(!BoundaryPoint::Real(0.0).coincides(&tiny, tol));
        assert!(!BoundaryPoint::Real(-1.6e-10).coincides(&BoundaryPoint::Real(1.6e-10), tol));
        assert!(tiny.coincides(&BoundaryPoint::Real(5e-10 * (1.0 + 1e-12)), tol));
        assert!(BoundaryPoint::Real(0.0).coincides(&BoundaryPoint::Real(0.0), tol));
        assert!(BoundaryPoint::Real(1e12).coincides(&BoundaryPoint::Real(1e12 + 1.0), tol));
        assert!(!BoundaryPoint::Real(1e12).coincides(&BoundaryPoint::Infinity, tol));
        assert!(BoundaryPoint::Infinity.coincides(&BoundaryPoint::Infinity, tol));
    }

    #[test]
    fn agrees_with_point_action() {
        let m = Transformation::new(2.0, 1.0, 1.0, 1.0).unwrap();
        for t in [-3.0, -0.5, 0.0, 0.75, 4.0] {
            let via_boundary = apply(&m, BoundaryPoint::Real(t)).to_point();
            assert_eq!(via_boundary, m.apply(Point::new(t, 0.0)));
        }
    }
}
