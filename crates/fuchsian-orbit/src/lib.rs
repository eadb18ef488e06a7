// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! fuchsian-orbit: orbits of points and curves under groups of Möbius
//! transformations.
//!
//! A caller supplies generators, a base object and a count. The engine
//! enumerates that many group elements (breadth-first over reduced words, or
//! a seeded random walk) and returns the image of the base object under each
//! one: points for [`orbit`], polylines for [`geodesic_orbit`] and
//! [`horocyclic_orbit`].
//!
//! ```
//! use fuchsian_orbit::{make_transformation, orbit, GeneratorSet, Mode, Point};
//!
//! let generators = GeneratorSet::new(vec![make_transformation(5.0, 0.0, 0.0, 0.2)?]);
//! let points = orbit(&generators, Point::new(1.0, 0.0), 2, Mode::Sequential)?;
//! assert_eq!(points, vec![Point::new(1.0, 0.0), Point::new(25.0, 0.0)]);
//! # Ok::<(), fuchsian_orbit::OrbitError>(())
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod curve;
mod error;
pub mod math;
mod orbit;
pub mod words;

pub use config::OrbitConfig;
pub use curve::{
    BoundaryPoint, Circline, Curve, CurveOrientation, Geodesic, GeodesicShape, HalfPlane,
    Horocycle, HorocycleShape, SamplingConfig,
};
pub use error::OrbitError;
pub use math::{MapKind, Point, Prng, Scalar, Tolerance, Transformation, EPSILON};
pub use orbit::{
    geodesic_orbit, horocyclic_orbit, make_transformation, orbit, to_plot_points,
    to_plot_polylines, Handoff, OrbitEngine,
};
pub use words::{enumerate, Alphabet, GeneratorSet, Letter, LetterOrder, Mode, Word};
