// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::{FRAC_PI_2, TAU};

use num_complex::Complex64;

use super::{
    check_resolution, unit_steps, BoundaryPoint, Circline, Curve, CurveOrientation, HalfPlane,
    SamplingConfig,
};
use crate::error::OrbitError;
use crate::math::{Point, Tolerance, Transformation};

/// Horocycle: a circle tangent to the boundary at `tangency`, or a
/// horizontal line when the tangency point is `∞`.
///
/// `extent` is the signed Euclidean diameter of the circle, or the signed
/// height of the line. A negative extent places the curve in the lower
/// half-plane, which only happens after an orientation-reversing map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horocycle {
    tangency: BoundaryPoint,
    extent: f64,
}

/// Euclidean shape of a horocycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorocycleShape {
    /// The line `Im(z) = height`.
    Line {
        /// Signed height above the real axis.
        height: f64,
    },
    /// Circle tangent to the real axis at `tangency`, centered at
    /// `(tangency, diameter / 2)`.
    Circle {
        /// Real tangency point.
        tangency: f64,
        /// Signed Euclidean diameter.
        diameter: f64,
    },
}

impl Horocycle {
    /// Horocycle tangent at `tangency` of diameter `extent`, or the line at
    /// height `extent` when `tangency` is `∞`.
    pub fn new(tangency: BoundaryPoint, extent: f64) -> Result<Self, OrbitError> {
        if let BoundaryPoint::Real(t) = tangency {
            if !t.is_finite() {
                return Err(OrbitError::InvalidCurveParameters(format!(
                    "horocycle tangency {t} is not finite"
                )));
            }
        }
        if !(extent.is_finite() && extent > 0.0) {
            return Err(OrbitError::InvalidCurveParameters(format!(
                "horocycle size must be finite and positive, got {extent}"
            )));
        }
        Ok(Self { tangency, extent })
    }

    /// The line `Im(z) = height`.
    pub fn at_infinity(height: f64) -> Result<Self, OrbitError> {
        Self::new(BoundaryPoint::Infinity, height)
    }

    /// Circle tangent at the real point `tangency`.
    pub fn tangent_at(tangency: f64, diameter: f64) -> Result<Self, OrbitError> {
        Self::new(BoundaryPoint::Real(tangency), diameter)
    }

    /// Boundary point the horocycle touches.
    pub fn tangency(&self) -> BoundaryPoint {
        self.tangency
    }

    /// Half-plane carrying the curve.
    pub fn side(&self) -> HalfPlane {
        if self.extent > 0.0 {
            HalfPlane::Upper
        } else {
            HalfPlane::Lower
        }
    }

    /// Euclidean shape.
    pub fn shape(&self) -> HorocycleShape {
        match self.tangency {
            BoundaryPoint::Infinity => HorocycleShape::Line {
                height: self.extent,
            },
            BoundaryPoint::Real(tangency) => HorocycleShape::Circle {
                tangency,
                diameter: self.extent,
            },
        }
    }

    /// Tolerance-aware comparison of the canonical parameters.
    pub fn same_curve(&self, other: &Self, tol: Tolerance) -> bool {
        self.tangency.approx_eq(&other.tangency, tol)
            && tol.approx_eq_real(self.extent, other.extent)
    }

    /// A point of the curve: the apex of the circle, or `i·height`.
    fn reference_point(&self) -> Point {
        match self.shape() {
            HorocycleShape::Line { height } => Point::new(0.0, height),
            HorocycleShape::Circle { tangency, diameter } => Point::new(tangency, diameter),
        }
    }
}

impl Curve for Horocycle {
    fn transform(&self, f: &Transformation<f64>, tol: Tolerance) -> Result<Self, OrbitError> {
        let tangency = f.apply_boundary(self.tangency, tol)?;
        let (x, y) = f
            .try_apply(self.reference_point(), tol)?
            .to_pair()
            .ok_or(OrbitError::NumericSingularity(
                "horocycle point mapped to infinity",
            ))?;
        let extent = match tangency {
            BoundaryPoint::Infinity => y,
            BoundaryPoint::Real(t) => {
                let dx = x - t;
                if tol.is_negligible(y, dx.abs() + y.abs()) {
                    return Err(OrbitError::NumericSingularity(
                        "horocycle point collapsed onto the boundary",
                    ));
                }
                // Circle tangent at t through (x, y): (x − t)² + y² = D·y.
                (dx * dx + y * y) / y
            }
        };
        if !extent.is_finite() || extent.abs() < f64::MIN_POSITIVE {
            return Err(OrbitError::NumericSingularity(
                "horocycle size left the finite range",
            ));
        }
        Ok(Self { tangency, extent })
    }

    fn sample(
        &self,
        resolution: usize,
        sampling: &SamplingConfig,
    ) -> Result<Vec<Point>, OrbitError> {
        check_resolution(resolution)?;
        let points = match self.shape() {
            HorocycleShape::Line { height } => {
                let half = 0.5 * sampling.line_width;
                unit_steps(resolution)
                    .map(|s| Point::new(-half + sampling.line_width * s, height))
                    .collect()
            }
            HorocycleShape::Circle { tangency, diameter } => {
                let radius = 0.5 * diameter.abs();
                let center = Complex64::new(tangency, 0.5 * diameter);
                let start = if diameter > 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
                // Mirror images keep the orientation of their preimage.
                let turn = match (sampling.orientation, self.side()) {
                    (CurveOrientation::AsGiven, HalfPlane::Lower) => -TAU,
                    _ => TAU,
                };
                let slots = (resolution + 1) as f64;
                (1..=resolution)
                    .map(|i| {
                        let phi = start + turn * (i as f64) / slots;
                        Point::Finite(center + Complex64::from_polar(radius, phi))
                    })
                    .collect()
            }
        };
        Ok(points)
    }

    fn circline(&self) -> Circline {
        match self.shape() {
            HorocycleShape::Line { height } => Circline::Line {
                anchor: Complex64::new(0.0, height),
                direction: Complex64::new(1.0, 0.0),
            },
            HorocycleShape::Circle { tangency, diameter } => Circline::Circle {
                center: Complex64::new(tangency, 0.5 * diameter),
                radius: 0.5 * diameter.abs(),
            },
        }
    }
}
