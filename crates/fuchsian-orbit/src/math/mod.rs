// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Möbius algebra: scalars, points of the extended plane, transformations,
//! and the seeded PRNG that drives random walks.
//!
//! All comparisons against zero go through [`Tolerance`], a relative epsilon
//! (default [`EPSILON`]) so that rescaled matrices classify identically.

mod point;
mod prng;
mod scalar;
mod transform;

pub use point::Point;
pub use prng::Prng;
pub use scalar::Scalar;
pub use transform::{MapKind, Transformation};

use num_complex::Complex64;

use crate::error::OrbitError;

/// Default relative epsilon used when detecting degenerate values.
pub const EPSILON: f64 = 1e-9;

/// Relative numeric tolerance shared by every zero test in the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Tolerance with [`EPSILON`].
    pub const DEFAULT: Self = Self { epsilon: EPSILON };

    /// Creates a tolerance; `epsilon` must be finite and strictly positive.
    pub fn new(epsilon: f64) -> Result<Self, OrbitError> {
        if epsilon.is_finite() && epsilon > 0.0 {
            Ok(Self { epsilon })
        } else {
            Err(OrbitError::InvalidConfig(format!(
                "epsilon must be finite and positive, got {epsilon}"
            )))
        }
    }

    /// The relative epsilon.
    pub fn epsilon(self) -> f64 {
        self.epsilon
    }

    /// `true` when `value` is negligible against the magnitude `scale` of the
    /// terms that produced it. A zero scale only admits an exact zero.
    pub fn is_negligible(self, value: f64, scale: f64) -> bool {
        value.abs() <= self.epsilon * scale.abs()
    }

    /// Compares two finite complex numbers, absolute near zero and relative
    /// for large magnitudes.
    pub fn approx_eq(self, lhs: Complex64, rhs: Complex64) -> bool {
        let scale = lhs.norm().max(rhs.norm()).max(1.0);
        (lhs - rhs).norm() <= self.epsilon * scale
    }

    /// Real-valued variant of [`Tolerance::approx_eq`].
    pub fn approx_eq_real(self, lhs: f64, rhs: f64) -> bool {
        let scale = lhs.abs().max(rhs.abs()).max(1.0);
        (lhs - rhs).abs() <= self.epsilon * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_epsilon() {
        assert!(Tolerance::new(0.0).is_err());
        assert!(Tolerance::new(-1e-3).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(1e-6).is_ok());
    }

    #[test]
    fn negligible_is_relative_to_scale() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_negligible(1e-12, 10.0));
        assert!(!tol.is_negligible(1e-6, 10.0));
        assert!(tol.is_negligible(1e3, 1e15));
        assert!(tol.is_negligible(0.0, 0.0));
        assert!(!tol.is_negligible(1e-300, 0.0));
    }

    #[test]
    fn approx_eq_floors_scale_at_one() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.approx_eq(Complex64::new(0.0, 0.0), Complex64::new(1e-10, 0.0)));
        assert!(!tol.approx_eq(Complex64::new(0.0, 0.0), Complex64::new(1e-8, 0.0)));
        assert!(tol.approx_eq(Complex64::new(1e9, 0.0), Complex64::new(1e9 + 0.5, 0.0)));
    }
}
