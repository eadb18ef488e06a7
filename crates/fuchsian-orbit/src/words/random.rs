// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use super::{Alphabet, Letter};
use crate::math::{Prng, Scalar, Transformation};

/// Random walk over `G ∪ G⁻¹` starting at the identity.
///
/// Each step draws a letter uniformly, right-multiplies its matrix into the
/// running product and yields the letter with the new product. The identity
/// itself is never yielded. No rejection or deduplication takes place.
#[derive(Debug)]
pub struct RandomWalk<'a, 'r, S: Scalar = f64> {
    alphabet: &'a Alphabet<S>,
    rng: &'r mut Prng,
    current: Transformation<S>,
    remaining: usize,
}

impl<'a, 'r, S: Scalar> RandomWalk<'a, 'r, S> {
    /// Walk of `steps` steps driven by `rng`.
    pub fn new(alphabet: &'a Alphabet<S>, rng: &'r mut Prng, steps: usize) -> Self {
        Self {
            alphabet,
            rng,
            current: Transformation::identity(),
            remaining: if alphabet.is_empty() { 0 } else { steps },
        }
    }
}

impl<S: Scalar> Iterator for RandomWalk<'_, '_, S> {
    type Item = (Letter, Transformation<S>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let letters = self.alphabet.letters();
        let (letter, matrix) = letters.get(self.rng.next_index(letters.len()))?;
        self.current *= matrix;
        self.remaining -= 1;
        Some((*letter, self.current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Scalar> ExactSizeIterator for RandomWalk<'_, '_, S> {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::Tolerance;
    use crate::words::{GeneratorSet, LetterOrder};

    fn alphabet() -> Alphabet {
        let set = GeneratorSet::new(vec![
            Transformation::new(1.0, 1.0, 0.0, 1.0).unwrap(),
            Transformation::new(0.0, -1.0, 1.0, 0.0).unwrap(),
        ]);
        Alphabet::new(&set, LetterOrder::GeneratorsThenInverses, Tolerance::DEFAULT).unwrap()
    }

    #[test]
    fn same_seed_replays_walk() {
        let alphabet = alphabet();
        let mut a = Prng::from_seed_u64(7);
        let mut b = Prng::from_seed_u64(7);
        let left: Vec<_> = RandomWalk::new(&alphabet, &mut a, 64).collect();
        let right: Vec<_> = RandomWalk::new(&alphabet, &mut b, 64).collect();
        assert_eq!(left, right);
        assert_eq!(a, b);
    }

    #[test]
    fn running_product_follows_letters() {
        let alphabet = alphabet();
        let mut rng = Prng::from_seed_u64(99);
        let mut expected = Transformation::identity();
        for (letter, product) in RandomWalk::new(&alphabet, &mut rng, 32) {
            expected *= alphabet.matrix(letter).unwrap();
            assert_eq!(product, expected);
        }
    }

    #[test]
    fn empty_alphabet_walks_nowhere() {
        let empty = Alphabet::<f64>::new(
            &GeneratorSet::new(Vec::new()),
            LetterOrder::GeneratorsThenInverses,
            Tolerance::DEFAULT,
        )
        .unwrap();
        let mut rng = Prng::from_seed_u64(1);
        assert_eq!(RandomWalk::new(&empty, &mut rng, 5).len(), 0);
    }
}
