// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::f64::consts::PI;

use num_complex::Complex64;

use super::{
    check_resolution, unit_steps, BoundaryPoint, Circline, Curve, CurveOrientation, HalfPlane,
    SamplingConfig,
};
use crate::error::OrbitError;
use crate::math::{Point, Tolerance, Transformation};

/// Hyperbolic geodesic identified by its two ideal endpoints.
///
/// The endpoint order is kept so that sampling can follow the base curve's
/// orientation; [`Geodesic::same_curve`] compares endpoints as an unordered
/// pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodesic {
    start: BoundaryPoint,
    end: BoundaryPoint,
    side: HalfPlane,
}

/// Euclidean shape of a geodesic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeodesicShape {
    /// Semicircle over the diameter `[center − radius, center + radius]`.
    Arc {
        /// Midpoint of the endpoints.
        center: f64,
        /// Half the endpoint distance.
        radius: f64,
    },
    /// Vertical ray above `foot`.
    Ray {
        /// The finite endpoint.
        foot: f64,
    },
}

impl Geodesic {
    /// Geodesic from `start` to `end` in the upper half-plane.
    pub fn new(start: BoundaryPoint, end: BoundaryPoint) -> Result<Self, OrbitError> {
        Self::with_tolerance(start, end, Tolerance::DEFAULT)
    }

    /// Like [`Geodesic::new`] with an explicit tolerance for the
    /// coincidence check.
    pub fn with_tolerance(
        start: BoundaryPoint,
        end: BoundaryPoint,
        tol: Tolerance,
    ) -> Result<Self, OrbitError> {
        for endpoint in [start, end] {
            if let BoundaryPoint::Real(t) = endpoint {
                if !t.is_finite() {
                    return Err(OrbitError::InvalidCurveParameters(format!(
                        "geodesic endpoint {t} is not finite"
                    )));
                }
            }
        }
        if start.coincides(&end, tol) {
            return Err(OrbitError::InvalidCurveParameters(format!(
                "geodesic endpoints coincide at {start}"
            )));
        }
        Ok(Self {
            start,
            end,
            side: HalfPlane::Upper,
        })
    }

    /// First endpoint.
    pub fn start(&self) -> BoundaryPoint {
        self.start
    }

    /// Second endpoint.
    pub fn end(&self) -> BoundaryPoint {
        self.end
    }

    /// Half-plane carrying the curve.
    pub fn side(&self) -> HalfPlane {
        self.side
    }

    /// Euclidean shape derived from the endpoints.
    pub fn shape(&self) -> GeodesicShape {
        match (self.start, self.end) {
            (BoundaryPoint::Real(p), BoundaryPoint::Real(q)) => GeodesicShape::Arc {
                center: 0.5 * (p + q),
                radius: 0.5 * (q - p).abs(),
            },
            (BoundaryPoint::Real(foot), BoundaryPoint::Infinity)
            | (BoundaryPoint::Infinity, BoundaryPoint::Real(foot)) => GeodesicShape::Ray { foot },
            // Rejected at construction and after every transform.
            (BoundaryPoint::Infinity, BoundaryPoint::Infinity) => GeodesicShape::Ray { foot: 0.0 },
        }
    }

    /// Same curve regardless of endpoint order.
    pub fn same_curve(&self, other: &Self, tol: Tolerance) -> bool {
        let forward =
            self.start.approx_eq(&other.start, tol) && self.end.approx_eq(&other.end, tol);
        let backward =
            self.start.approx_eq(&other.end, tol) && self.end.approx_eq(&other.start, tol);
        self.side == other.side && (forward || backward)
    }

    fn runs_backwards(&self, orientation: CurveOrientation) -> bool {
        match orientation {
            CurveOrientation::Canonical => false,
            CurveOrientation::AsGiven => match (self.start, self.end) {
                (BoundaryPoint::Real(p), BoundaryPoint::Real(q)) => p > q,
                (start, _) => start.is_infinite(),
            },
        }
    }
}

impl Curve for Geodesic {
    fn transform(&self, f: &Transformation<f64>, tol: Tolerance) -> Result<Self, OrbitError> {
        let start = f.apply_boundary(self.start, tol)?;
        let end = f.apply_boundary(self.end, tol)?;
        if start.coincides(&end, tol) {
            return Err(OrbitError::NumericSingularity(
                "geodesic endpoints collapsed under transformation",
            ));
        }
        Ok(Self {
            start,
            end,
            side: self.side.after(f),
        })
    }

    fn sample(
        &self,
        resolution: usize,
        sampling: &SamplingConfig,
    ) -> Result<Vec<Point>, OrbitError> {
        check_resolution(resolution)?;
        let sign = self.side.sign();
        let backwards = self.runs_backwards(sampling.orientation);
        let points = match self.shape() {
            GeodesicShape::Arc { center, radius } => {
                // Angle at the center: π is the left endpoint, 0 the right one.
                let (from, to) = if backwards { (0.0, PI) } else { (PI, 0.0) };
                unit_steps(resolution)
                    .map(|s| {
                        let theta = from + (to - from) * s;
                        Point::new(center + radius * theta.cos(), sign * radius * theta.sin())
                    })
                    .collect()
            }
            GeodesicShape::Ray { foot } => {
                let top = sampling.max_ray_height;
                let (from, to) = if backwards { (top, 0.0) } else { (0.0, top) };
                unit_steps(resolution)
                    .map(|s| Point::new(foot, sign * (from + (to - from) * s)))
                    .collect()
            }
        };
        Ok(points)
    }

    fn circline(&self) -> Circline {
        match self.shape() {
            GeodesicShape::Arc { center, radius } => Circline::Circle {
                center: Complex64::new(center, 0.0),
                radius,
            },
            GeodesicShape::Ray { foot } => Circline::Line {
                anchor: Complex64::new(foot, 0.0),
                direction: Complex64::new(0.0, 1.0),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn geodesic(p: BoundaryPoint, q: BoundaryPoint) -> Geodesic {
        Geodesic::new(p, q).unwrap()
    }

    #[test]
    fn rejects_coincident_endpoints() {
        assert!(Geodesic::new(1.0.into(), 1.0.into()).is_err());
        assert!(Geodesic::new(BoundaryPoint::Infinity, BoundaryPoint::Infinity).is_err());
        assert!(Geodesic::new(f64::NAN.into(), 1.0.into()).is_err());
    }

    #[test]
    fn small_arcs_near_zero_are_valid() {
        let g = geodesic(0.0.into(), 5e-10.into());
        assert_eq!(
            g.shape(),
            GeodesicShape::Arc {
                center: 2.5e-10,
                radius: 2.5e-10
            }
        );

        // g⁻⁷ of the dilation z ↦ 25z.
        let deep = Transformation::new(0.2f64.powi(7), 0.0, 0.0, 5f64.powi(7)).unwrap();
        let image = geodesic((-1.0).into(), 1.0.into())
            .transform(&deep, Tolerance::DEFAULT)
            .unwrap();
        let GeodesicShape::Arc { center, radius } = image.shape() else {
            unreachable!("dilation keeps both endpoints finite, got {image:?}")
        };
        assert_eq!(center, 0.0);
        assert_relative_eq!(radius, 25f64.powi(-7), max_relative = 1e-12);
        let pts = image.sample(5, &SamplingConfig::default()).unwrap();
        assert!(pts.iter().all(|p| p.to_pair().is_some()));
    }

    #[test]
    fn arc_samples_run_between_endpoints() {
        let g = geodesic((-1.0).into(), 1.0.into());
        let pts = g.sample(3, &SamplingConfig::default()).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(-1.0, 0.0));
        assert_eq!(pts[1], Point::new(0.0, 1.0));
        assert_eq!(pts[2], Point::new(1.0, 0.0));
    }

    #[test]
    fn as_given_follows_endpoint_order() {
        let g = geodesic(3.0.into(), 1.0.into());
        let pts = g.sample(4, &SamplingConfig::default()).unwrap();
        assert_eq!(pts[0], Point::new(3.0, 0.0));
        assert_eq!(pts[3], Point::new(1.0, 0.0));

        let canonical = SamplingConfig {
            orientation: CurveOrientation::Canonical,
            ..SamplingConfig::default()
        };
        let pts = g.sample(4, &canonical).unwrap();
        assert_eq!(pts[0], Point::new(1.0, 0.0));
        assert_eq!(pts[3], Point::new(3.0, 0.0));
    }

    #[test]
    fn ray_is_cut_at_max_height() {
        let g = geodesic(BoundaryPoint::Infinity, 2.0.into());
        let sampling = SamplingConfig {
            max_ray_height: 4.0,
            ..SamplingConfig::default()
        };
        let pts = g.sample(5, &sampling).unwrap();
        assert_eq!(pts[0], Point::new(2.0, 4.0));
        assert_eq!(pts[4], Point::new(2.0, 0.0));
        assert!(pts.iter().all(|p| g.circline().contains(*p, Tolerance::DEFAULT)));
    }

    #[test]
    fn pole_at_endpoint_switches_arc_to_ray() {
        // z ↦ −1/z sends 0 to ∞.
        let s = Transformation::new(0.0, -1.0, 1.0, 0.0).unwrap();
        let g = geodesic(0.0.into(), 2.0.into());
        let image = g.transform(&s, Tolerance::DEFAULT).unwrap();
        assert_eq!(image.shape(), GeodesicShape::Ray { foot: -0.5 });

        // And back again.
        let back = image.transform(&s, Tolerance::DEFAULT).unwrap();
        assert!(back.same_curve(&g, Tolerance::DEFAULT));
        assert!(matches!(back.shape(), GeodesicShape::Arc { .. }));
    }

    #[test]
    fn orientation_reversal_samples_lower_half_plane() {
        let flip = Transformation::new(-1.0, 0.0, 0.0, 1.0).unwrap();
        let g = geodesic((-1.0).into(), 3.0.into());
        let image = g.transform(&flip, Tolerance::DEFAULT).unwrap();
        assert_eq!(image.side(), HalfPlane::Lower);
        let pts = image.sample(9, &SamplingConfig::default()).unwrap();
        assert!(pts.iter().all(|p| p.to_pair().is_some_and(|(_, y)| y <= 0.0)));
    }
}
