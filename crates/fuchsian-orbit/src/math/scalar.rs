// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_complex::Complex64;

/// Scalar field of a [`super::Transformation`] matrix.
///
/// Implemented for `f64` (maps preserving the real line, i.e. Fuchsian
/// candidates) and `Complex64` (general Möbius maps). Application to a point
/// always happens in complex arithmetic; real matrices embed losslessly.
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Additive identity.
    fn zero() -> Self;
    /// Multiplicative identity.
    fn one() -> Self;
    /// Absolute value / complex modulus.
    fn magnitude(self) -> f64;
    /// Embeds the scalar in the complex plane.
    fn to_complex(self) -> Complex64;
    /// Multiplies by a real factor.
    fn scale(self, factor: f64) -> Self;
    /// `true` when every component is finite.
    fn is_finite(self) -> bool;
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }

    fn to_complex(self) -> Complex64 {
        Complex64::new(self, 0.0)
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl Scalar for Complex64 {
    fn zero() -> Self {
        Complex64::new(0.0, 0.0)
    }

    fn one() -> Self {
        Complex64::new(1.0, 0.0)
    }

    fn magnitude(self) -> f64 {
        self.norm()
    }

    fn to_complex(self) -> Complex64 {
        self
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }

    fn is_finite(self) -> bool {
        Complex64::is_finite(self)
    }
}
