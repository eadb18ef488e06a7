// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Curves of the upper half-plane: boundary points, geodesics, horocycles.
//!
//! Curves are transported by mapping their defining boundary data through a
//! transformation, never by refitting sampled points. Sampling into polylines
//! happens only once the transformed canonical parameters are known.

mod boundary;
mod circline;
mod geodesic;
mod horocycle;

pub use boundary::BoundaryPoint;
pub use circline::Circline;
pub use geodesic::{Geodesic, GeodesicShape};
pub use horocycle::{Horocycle, HorocycleShape};

use serde::{Deserialize, Serialize};

use crate::error::OrbitError;
use crate::math::{Point, Tolerance, Transformation};

/// A curve that real Möbius maps carry to a curve of the same family.
pub trait Curve: Sized + Clone + Send + Sync {
    /// Image of the curve under `f`, computed from its defining parameters.
    fn transform(&self, f: &Transformation<f64>, tol: Tolerance) -> Result<Self, OrbitError>;

    /// Polyline of exactly `resolution` points along the curve.
    fn sample(
        &self,
        resolution: usize,
        sampling: &SamplingConfig,
    ) -> Result<Vec<Point>, OrbitError>;

    /// The circline carrying the curve.
    fn circline(&self) -> Circline;
}

/// Direction in which polylines traverse a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveOrientation {
    /// Follow the curve's parameters: a geodesic runs from its first endpoint
    /// to its second, so images keep the orientation of the base curve.
    #[default]
    AsGiven,
    /// Left to right along arcs, boundary upwards along rays.
    Canonical,
}

/// Half-plane a transported curve lives in.
///
/// Orientation-reversing real maps swap the upper and lower half-planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HalfPlane {
    /// `Im(z) ≥ 0`.
    #[default]
    Upper,
    /// `Im(z) ≤ 0`.
    Lower,
}

impl HalfPlane {
    /// `+1` for the upper half-plane, `−1` for the lower one.
    pub fn sign(self) -> f64 {
        match self {
            Self::Upper => 1.0,
            Self::Lower => -1.0,
        }
    }

    /// Half-plane after applying `f`.
    pub fn after(self, f: &Transformation<f64>) -> Self {
        match (self, f.is_orientation_preserving()) {
            (side, true) => side,
            (Self::Upper, false) => Self::Lower,
            (Self::Lower, false) => Self::Upper,
        }
    }
}

/// Finite windows used when sampling unbounded curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Cutoff height `H_max` for vertical geodesic rays.
    pub max_ray_height: f64,
    /// Width `W` of the segment sampled on horizontal horocycles, centered on
    /// the imaginary axis.
    pub line_width: f64,
    /// Traversal direction of sampled polylines.
    pub orientation: CurveOrientation,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_ray_height: 10.0,
            line_width: 20.0,
            orientation: CurveOrientation::AsGiven,
        }
    }
}

impl SamplingConfig {
    /// Rejects non-finite or non-positive windows.
    pub fn validate(&self) -> Result<(), OrbitError> {
        if !(self.max_ray_height.is_finite() && self.max_ray_height > 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "max_ray_height must be finite and positive, got {}",
                self.max_ray_height
            )));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(OrbitError::InvalidConfig(format!(
                "line_width must be finite and positive, got {}",
                self.line_width
            )));
        }
        Ok(())
    }
}

pub(crate) fn check_resolution(resolution: usize) -> Result<(), OrbitError> {
    if resolution < 2 {
        return Err(OrbitError::InvalidCurveParameters(format!(
            "resolution must be at least 2, got {resolution}"
        )));
    }
    Ok(())
}

/// `resolution` evenly spaced parameters covering `[0, 1]` inclusive.
pub(crate) fn unit_steps(resolution: usize) -> impl Iterator<Item = f64> {
    let last = resolution.saturating_sub(1).max(1) as f64;
    (0..resolution).map(move |i| i as f64 / last)
}
