// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for the orbit engine.

use thiserror::Error;

/// Errors emitted by the orbit engine.
///
/// Construction-time variants (`DegenerateTransformation`,
/// `InvalidGeneratorSet`, `InvalidCurveParameters`, `InvalidConfig`) abort the
/// call that raised them. `NumericSingularity` is raised per element and the
/// orbit assembler recovers from it by substituting [`crate::Point::Infinity`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrbitError {
    /// The matrix determinant is negligible, so the map is not invertible.
    #[error("degenerate transformation: determinant {determinant} is negligible")]
    DegenerateTransformation {
        /// Determinant magnitude observed at construction or inversion.
        determinant: f64,
    },
    /// No non-identity element is reachable from the supplied generators.
    #[error("invalid generator set: {0}")]
    InvalidGeneratorSet(&'static str),
    /// Curve or sampling parameters are out of their domain.
    #[error("invalid curve parameters: {0}")]
    InvalidCurveParameters(String),
    /// A computed value hit a pole or left the finite range.
    #[error("numeric singularity: {0}")]
    NumericSingularity(&'static str),
    /// Engine configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
