// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OrbitError;
use crate::math::{Scalar, Tolerance, Transformation};

/// One symbol of `G ∪ G⁻¹`: generator `generator` or its inverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter {
    /// Index of the generator in caller order.
    pub generator: usize,
    /// `true` for the inverse of the generator.
    pub inverse: bool,
}

impl Letter {
    /// The generator itself.
    pub const fn forward(generator: usize) -> Self {
        Self {
            generator,
            inverse: false,
        }
    }

    /// The inverse of the generator.
    pub const fn backward(generator: usize) -> Self {
        Self {
            generator,
            inverse: true,
        }
    }

    /// The letter that cancels this one.
    pub const fn inverted(self) -> Self {
        Self {
            generator: self.generator,
            inverse: !self.inverse,
        }
    }

    /// `true` when `self · other` reduces to the empty word.
    pub fn is_inverse_of(self, other: Self) -> bool {
        self.inverted() == other
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverse {
            write!(f, "g{}⁻¹", self.generator)
        } else {
            write!(f, "g{}", self.generator)
        }
    }
}

/// Tie-break order of letters within one word length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterOrder {
    /// `g0, g1, …, g0⁻¹, g1⁻¹, …`
    #[default]
    GeneratorsThenInverses,
    /// `g0, g0⁻¹, g1, g1⁻¹, …`
    Interleaved,
}

/// A reduced word over `G ∪ G⁻¹`; the empty word is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// The empty word.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Letters in multiplication order.
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Word length.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// `true` for the identity.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Last letter, if any.
    pub fn last(&self) -> Option<Letter> {
        self.letters.last().copied()
    }

    /// `true` when `letter` may follow this word without cancelling.
    pub fn accepts(&self, letter: Letter) -> bool {
        self.last().is_none_or(|last| !last.is_inverse_of(letter))
    }

    pub(crate) fn extended(&self, letter: Letter) -> Self {
        let mut letters = Vec::with_capacity(self.letters.len() + 1);
        letters.extend_from_slice(&self.letters);
        letters.push(letter);
        Self { letters }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = self.letters.iter();
        match letters.next() {
            None => write!(f, "e"),
            Some(first) => {
                write!(f, "{first}")?;
                for letter in letters {
                    write!(f, "·{letter}")?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered generators supplied by the caller.
///
/// No discreteness check is made; any finite list of invertible maps works.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSet<S: Scalar = f64> {
    generators: Vec<Transformation<S>>,
}

impl<S: Scalar> GeneratorSet<S> {
    /// Wraps the generators, keeping caller order.
    pub fn new(generators: Vec<Transformation<S>>) -> Self {
        Self { generators }
    }

    /// `true` when no generator was supplied.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Number of generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Generator `index`.
    pub fn get(&self, index: usize) -> Option<&Transformation<S>> {
        self.generators.get(index)
    }

    /// Generators in caller order.
    pub fn iter(&self) -> impl Iterator<Item = &Transformation<S>> + '_ {
        self.generators.iter()
    }
}

impl GeneratorSet<f64> {
    /// Keeps the generators that project into SL(2, ℝ), rescaled to
    /// determinant 1. The rest are dropped.
    pub fn projected<I>(raw: I, tol: Tolerance) -> Self
    where
        I: IntoIterator<Item = Transformation<f64>>,
    {
        let generators = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, g)| match g.project_special_linear(tol) {
                Ok(projected) => Some(projected),
                Err(err) => {
                    debug!(index, generator = %g, %err, "dropping generator");
                    None
                }
            })
            .collect();
        Self { generators }
    }
}

impl<S: Scalar> From<Vec<Transformation<S>>> for GeneratorSet<S> {
    fn from(generators: Vec<Transformation<S>>) -> Self {
        Self::new(generators)
    }
}

impl<S: Scalar> FromIterator<Transformation<S>> for GeneratorSet<S> {
    fn from_iter<I: IntoIterator<Item = Transformation<S>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// `G ∪ G⁻¹` with each letter's matrix, in tie-break order.
#[derive(Debug, Clone)]
pub struct Alphabet<S: Scalar = f64> {
    letters: Vec<(Letter, Transformation<S>)>,
}

impl<S: Scalar> Alphabet<S> {
    /// Inverts every generator and lays the letters out in `order`.
    pub fn new(
        generators: &GeneratorSet<S>,
        order: LetterOrder,
        tol: Tolerance,
    ) -> Result<Self, OrbitError> {
        let inverses = generators
            .iter()
            .map(|g| g.inverse_with(tol))
            .collect::<Result<Vec<_>, _>>()?;
        let forward = generators
            .iter()
            .enumerate()
            .map(|(i, g)| (Letter::forward(i), *g));
        let backward = inverses
            .into_iter()
            .enumerate()
            .map(|(i, g)| (Letter::backward(i), g));
        let letters = match order {
            LetterOrder::GeneratorsThenInverses => forward.chain(backward).collect(),
            LetterOrder::Interleaved => forward
                .zip(backward)
                .flat_map(|(f, b)| [f, b])
                .collect(),
        };
        Ok(Self { letters })
    }

    /// Letters with their matrices.
    pub fn letters(&self) -> &[(Letter, Transformation<S>)] {
        &self.letters
    }

    /// Number of letters, twice the generator count.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// `true` when there are no generators.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Matrix of `letter`.
    pub fn matrix(&self, letter: Letter) -> Option<&Transformation<S>> {
        self.letters
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, m)| m)
    }

    /// Product of the letters of `word`, left to right.
    pub fn evaluate(&self, word: &Word) -> Option<Transformation<S>> {
        word.letters()
            .iter()
            .try_fold(Transformation::identity(), |acc, letter| {
                self.matrix(*letter).map(|m| acc * m)
            })
    }
}
