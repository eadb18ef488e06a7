// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use num_complex::Complex64;

use crate::math::{Point, Tolerance};

/// A generalized circle of the plane: a Euclidean circle or a straight line.
///
/// Möbius maps send circlines to circlines; every curve of the engine
/// reports the circline carrying it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Circline {
    /// Circle with the given center and radius.
    Circle {
        /// Euclidean center.
        center: Complex64,
        /// Euclidean radius (positive).
        radius: f64,
    },
    /// Line through `anchor` along the unit vector `direction`.
    Line {
        /// Any point on the line.
        anchor: Complex64,
        /// Unit direction vector.
        direction: Complex64,
    },
}

impl Circline {
    /// Euclidean distance from `z` to the circline.
    pub fn distance(&self, z: Complex64) -> f64 {
        match self {
            Self::Circle { center, radius } => ((z - center).norm() - radius).abs(),
            Self::Line { anchor, direction } => {
                // |Im(conj(dir) · (z − anchor))| is the perpendicular offset.
                (direction.conj() * (z - anchor)).im.abs()
            }
        }
    }

    /// `true` when `point` lies on the circline within `tol`, relative to the
    /// circline's own size. `∞` lies on every line and on no circle.
    pub fn contains(&self, point: Point, tol: Tolerance) -> bool {
        match (self, point) {
            (Self::Line { .. }, Point::Infinity) => true,
            (Self::Circle { .. }, Point::Infinity) => false,
            (Self::Circle { center, radius }, Point::Finite(z)) => {
                let scale = (center.norm() + radius).max(1.0);
                self.distance(z) <= tol.epsilon() * scale
            }
            (Self::Line { anchor, .. }, Point::Finite(z)) => {
                let scale = anchor.norm().max(z.norm()).max(1.0);
                self.distance(z) <= tol.epsilon() * scale
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn circle_distance() {
        let c = Circline::Circle {
            center: Complex64::new(1.0, 0.0),
            radius: 2.0,
        };
        assert!(c.contains(Point::new(3.0, 0.0), Tolerance::DEFAULT));
        assert!(c.contains(Point::new(1.0, 2.0), Tolerance::DEFAULT));
        assert!(!c.contains(Point::new(1.0, 1.0), Tolerance::DEFAULT));
        assert!(!c.contains(Point::Infinity, Tolerance::DEFAULT));
    }

    #[test]
    fn vertical_line_distance() {
        let l = Circline::Line {
            anchor: Complex64::new(2.0, 0.0),
            direction: Complex64::new(0.0, 1.0),
        };
        assert!((l.distance(Complex64::new(5.0, 7.0)) - 3.0).abs() < 1e-12);
        assert!(l.contains(Point::new(2.0, 42.0), Tolerance::DEFAULT));
        assert!(l.contains(Point::Infinity, Tolerance::DEFAULT));
    }
}
