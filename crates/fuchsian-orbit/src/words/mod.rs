// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Word enumeration over `G ∪ G⁻¹`.
//!
//! A word `l₁ l₂ … l_L` stands for the product `M(l₁)·M(l₂)·…·M(l_L)`; every
//! enumerator extends words on the right.

mod alphabet;
mod random;
mod sequential;

pub use alphabet::{Alphabet, GeneratorSet, Letter, LetterOrder, Word};
pub use random::RandomWalk;
pub use sequential::SequentialWords;

use tracing::{debug, warn};

use crate::error::OrbitError;
use crate::math::{Prng, Scalar, Tolerance, Transformation};

/// How group elements are enumerated.
#[derive(Debug)]
pub enum Mode<'r> {
    /// Breadth-first over reduced words, identity first.
    Sequential,
    /// Random walk driven by a caller-owned generator.
    Random(&'r mut Prng),
}

impl Mode<'_> {
    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Random(_) => "random",
        }
    }
}

/// Materializes exactly `count` group elements in enumeration order.
///
/// With no generators only the identity is reachable: `count ≤ 1` succeeds
/// and anything larger is an [`OrbitError::InvalidGeneratorSet`].
///
/// Products whose determinant drifted to near zero are kept and reported in
/// a single warning.
pub fn enumerate<S: Scalar>(
    generators: &GeneratorSet<S>,
    count: usize,
    mode: Mode<'_>,
    order: LetterOrder,
    tol: Tolerance,
) -> Result<Vec<Transformation<S>>, OrbitError> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if generators.is_empty() {
        if count > 1 {
            return Err(OrbitError::InvalidGeneratorSet(
                "no generators to extend the identity",
            ));
        }
        return Ok(vec![Transformation::identity()]);
    }

    let label = mode.label();
    let alphabet = Alphabet::new(generators, order, tol)?;
    let elements: Vec<Transformation<S>> = match mode {
        Mode::Sequential => SequentialWords::new(&alphabet, count)
            .map(|(_, m)| m)
            .collect(),
        Mode::Random(rng) => RandomWalk::new(&alphabet, rng, count)
            .map(|(_, m)| m)
            .collect(),
    };

    let drifting = elements
        .iter()
        .filter(|m| m.is_near_degenerate(tol))
        .count();
    if drifting > 0 {
        warn!(drifting, count, "enumerated products have near-zero determinant");
    }
    debug!(count, mode = label, letters = alphabet.len(), "enumerated group elements");
    Ok(elements)
}
