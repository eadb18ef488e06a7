// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Orbit assembly: enumerate group elements, then apply them to a base
//! point or curve.
//!
//! Elements are materialized on the calling thread (the random walk is
//! inherently sequential). The application step runs on a scoped worker pool
//! once the orbit reaches [`OrbitConfig::parallel_threshold`] elements. Output
//! order always matches enumeration order.

mod exec;
mod plot;

pub use plot::{to_plot_points, to_plot_polylines, Handoff};

use tracing::{debug, instrument, warn};

use crate::config::OrbitConfig;
use crate::curve::{BoundaryPoint, Curve, Geodesic, Horocycle};
use crate::error::OrbitError;
use crate::math::{Point, Scalar, Tolerance, Transformation};
use crate::words::{enumerate, GeneratorSet, Mode};

/// Orbit assembler bound to a validated configuration.
#[derive(Debug, Clone)]
pub struct OrbitEngine {
    config: OrbitConfig,
    tol: Tolerance,
}

impl Default for OrbitEngine {
    fn default() -> Self {
        Self {
            config: OrbitConfig::default(),
            tol: Tolerance::DEFAULT,
        }
    }
}

impl OrbitEngine {
    /// Validates `config` and builds an engine around it.
    pub fn new(config: OrbitConfig) -> Result<Self, OrbitError> {
        config.validate()?;
        let tol = config.tolerance()?;
        Ok(Self { config, tol })
    }

    /// Active configuration.
    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    /// Tolerance derived from the configured epsilon.
    pub fn tolerance(&self) -> Tolerance {
        self.tol
    }

    /// Builds a transformation under the engine's tolerance.
    pub fn make_transformation<S: Scalar>(
        &self,
        a: S,
        b: S,
        c: S,
        d: S,
    ) -> Result<Transformation<S>, OrbitError> {
        Transformation::with_tolerance(a, b, c, d, self.tol)
    }

    /// Images of `base` under the first `count` enumerated elements.
    ///
    /// Poles and overflow yield [`Point::Infinity`] in place.
    #[instrument(skip_all, fields(count = count, mode = mode.label()))]
    pub fn orbit<S: Scalar>(
        &self,
        generators: &GeneratorSet<S>,
        base: Point,
        count: usize,
        mode: Mode<'_>,
    ) -> Result<Vec<Point>, OrbitError> {
        let elements = enumerate(generators, count, mode, self.config.letter_order, self.tol)?;
        let tol = self.tol;
        let points = self.map(&elements, |m| m.apply_with(base, tol));
        let at_infinity = points.iter().filter(|p| p.is_infinite()).count();
        debug!(at_infinity, "point orbit assembled");
        Ok(points)
    }

    /// Polylines of the geodesic with the given endpoints under the first
    /// `count` elements.
    #[instrument(skip_all, fields(count = count, resolution = resolution, mode = mode.label()))]
    pub fn geodesic_orbit(
        &self,
        generators: &GeneratorSet<f64>,
        endpoints: (BoundaryPoint, BoundaryPoint),
        count: usize,
        resolution: usize,
        mode: Mode<'_>,
    ) -> Result<Vec<Vec<Point>>, OrbitError> {
        let base = Geodesic::with_tolerance(endpoints.0, endpoints.1, self.tol)?;
        self.curve_orbit(generators, &base, count, resolution, mode)
    }

    /// Polylines of the horocycle `Im(z) = height` under the first `count`
    /// elements.
    #[instrument(skip_all, fields(count = count, resolution = resolution, mode = mode.label()))]
    pub fn horocyclic_orbit(
        &self,
        generators: &GeneratorSet<f64>,
        height: f64,
        count: usize,
        resolution: usize,
        mode: Mode<'_>,
    ) -> Result<Vec<Vec<Point>>, OrbitError> {
        let base = Horocycle::at_infinity(height)?;
        self.curve_orbit(generators, &base, count, resolution, mode)
    }

    /// Polylines of any [`Curve`] under the first `count` elements.
    ///
    /// An element whose image degenerates contributes `resolution` copies of
    /// [`Point::Infinity`], so every polyline keeps its slot.
    pub fn curve_orbit<C: Curve>(
        &self,
        generators: &GeneratorSet<f64>,
        base: &C,
        count: usize,
        resolution: usize,
        mode: Mode<'_>,
    ) -> Result<Vec<Vec<Point>>, OrbitError> {
        // Surface bad resolutions before any enumeration work.
        base.sample(resolution, &self.config.sampling)?;
        let elements = enumerate(generators, count, mode, self.config.letter_order, self.tol)?;
        let (tol, sampling) = (self.tol, self.config.sampling);
        let images = self.map(&elements, |m| {
            base.transform(m, tol)
                .and_then(|curve| curve.sample(resolution, &sampling))
        });

        let mut singular = 0usize;
        let polylines = images
            .into_iter()
            .enumerate()
            .map(|(index, image)| match image {
                Ok(points) => points,
                Err(err) => {
                    debug!(index, %err, "curve image is singular");
                    singular += 1;
                    vec![Point::Infinity; resolution]
                }
            })
            .collect();
        if singular > 0 {
            warn!(singular, "curve images fell back to infinity");
        }
        Ok(polylines)
    }

    fn map<S, U, F>(&self, elements: &[Transformation<S>], f: F) -> Vec<U>
    where
        S: Scalar,
        U: Send,
        F: Fn(&Transformation<S>) -> U + Sync,
    {
        exec::map_ordered(
            elements,
            self.config.workers,
            self.config.parallel_threshold,
            f,
        )
    }
}

/// [`OrbitEngine::orbit`] under the default configuration.
pub fn orbit<S: Scalar>(
    generators: &GeneratorSet<S>,
    base: Point,
    count: usize,
    mode: Mode<'_>,
) -> Result<Vec<Point>, OrbitError> {
    OrbitEngine::default().orbit(generators, base, count, mode)
}

/// [`OrbitEngine::geodesic_orbit`] under the default configuration.
pub fn geodesic_orbit(
    generators: &GeneratorSet<f64>,
    endpoints: (BoundaryPoint, BoundaryPoint),
    count: usize,
    resolution: usize,
    mode: Mode<'_>,
) -> Result<Vec<Vec<Point>>, OrbitError> {
    OrbitEngine::default().geodesic_orbit(generators, endpoints, count, resolution, mode)
}

/// [`OrbitEngine::horocyclic_orbit`] under the default configuration.
pub fn horocyclic_orbit(
    generators: &GeneratorSet<f64>,
    height: f64,
    count: usize,
    resolution: usize,
    mode: Mode<'_>,
) -> Result<Vec<Vec<Point>>, OrbitError> {
    OrbitEngine::default().horocyclic_orbit(generators, height, count, resolution, mode)
}

/// Builds `z ↦ (az + b) / (cz + d)`, rejecting a negligible determinant.
pub fn make_transformation<S: Scalar>(
    a: S,
    b: S,
    c: S,
    d: S,
) -> Result<Transformation<S>, OrbitError> {
    Transformation::new(a, b, c, d)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Prng;

    fn modular() -> GeneratorSet {
        GeneratorSet::new(vec![
            make_transformation(1.0, 1.0, 0.0, 1.0).unwrap(),
            make_transformation(0.0, -1.0, 1.0, 0.0).unwrap(),
        ])
    }

    #[test]
    fn serial_and_pooled_orbits_agree() {
        let serial = OrbitEngine::new(OrbitConfig {
            workers: 1,
            ..OrbitConfig::default()
        })
        .unwrap();
        let pooled = OrbitEngine::new(OrbitConfig {
            workers: 4,
            parallel_threshold: 1,
            ..OrbitConfig::default()
        })
        .unwrap();
        let base = Point::new(0.25, 1.5);
        let a = serial.orbit(&modular(), base, 500, Mode::Sequential).unwrap();
        let b = pooled.orbit(&modular(), base, 500, Mode::Sequential).unwrap();
        assert_eq!(a.len(), 500);
        assert!(a.iter().zip(&b).all(|(p, q)| p == q));
    }

    #[test]
    fn singular_curve_images_keep_their_slot() {
        // z ↦ 10²⁰ z lifts the horocycle past the largest finite height.
        let lift = GeneratorSet::new(vec![make_transformation(1e10, 0.0, 0.0, 1e-10).unwrap()]);
        let lines = horocyclic_orbit(&lift, 1e300, 3, 4, Mode::Sequential).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.len() == 4));
        assert!(lines[1].iter().all(Point::is_infinite));
        assert!(lines[2].iter().all(|p| !p.is_infinite()));
    }

    #[test]
    fn bad_resolution_fails_before_enumeration() {
        let empty = GeneratorSet::new(Vec::new());
        let err = geodesic_orbit(
            &empty,
            (BoundaryPoint::Real(0.0), BoundaryPoint::Infinity),
            5,
            1,
            Mode::Sequential,
        );
        assert!(matches!(err, Err(OrbitError::InvalidCurveParameters(_))));
    }

    #[test]
    fn random_mode_uses_caller_rng() {
        let mut rng = Prng::from_seed_u64(5);
        let before = rng;
        let pts = orbit(&modular(), Point::I, 8, Mode::Random(&mut rng)).unwrap();
        assert_eq!(pts.len(), 8);
        assert_ne!(rng, before);
    }
}
