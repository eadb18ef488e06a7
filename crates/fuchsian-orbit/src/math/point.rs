// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use num_complex::Complex64;

use super::Tolerance;

/// A point of the extended complex plane.
///
/// Equality (`==`) compares finite coordinates within [`Tolerance::DEFAULT`];
/// use [`Point::approx_eq`] to compare under a configured tolerance.
#[derive(Debug, Clone, Copy)]
pub enum Point {
    /// A finite complex number `x + iy`.
    Finite(Complex64),
    /// The point at infinity.
    Infinity,
}

impl Point {
    /// Finite point `x + iy`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self::Finite(Complex64::new(x, y))
    }

    /// The imaginary unit `i`, the usual base point of the upper half-plane.
    pub const I: Self = Self::new(0.0, 1.0);

    /// `true` for [`Point::Infinity`].
    pub fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// The finite value, if any.
    pub fn as_complex(&self) -> Option<Complex64> {
        match self {
            Self::Finite(z) => Some(*z),
            Self::Infinity => None,
        }
    }

    /// `(x, y)` coordinates of a finite point.
    pub fn to_pair(&self) -> Option<(f64, f64)> {
        self.as_complex().map(|z| (z.re, z.im))
    }

    /// Tolerance-aware equality.
    pub fn approx_eq(&self, other: &Self, tol: Tolerance) -> bool {
        match (self, other) {
            (Self::Infinity, Self::Infinity) => true,
            (Self::Finite(a), Self::Finite(b)) => tol.approx_eq(*a, *b),
            _ => false,
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, Tolerance::DEFAULT)
    }
}

impl From<Complex64> for Point {
    fn from(z: Complex64) -> Self {
        Self::Finite(z)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(z) => write!(f, "({}, {})", z.re, z.im),
            Self::Infinity => write!(f, "∞"),
        }
    }
}
