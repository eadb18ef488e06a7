// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::VecDeque;

use super::{Alphabet, Word};
use crate::math::{Scalar, Transformation};

/// Breadth-first enumeration of reduced words, shortest first.
///
/// Yields exactly `count` words (fewer only if the alphabet is empty), each
/// paired with its product. Within one length, words follow the alphabet's
/// letter order lexicographically. Only as many children are queued as are
/// still owed, so memory stays `O(count)`.
#[derive(Debug)]
pub struct SequentialWords<'a, S: Scalar = f64> {
    alphabet: &'a Alphabet<S>,
    queue: VecDeque<(Word, Transformation<S>)>,
    unqueued: usize,
}

impl<'a, S: Scalar> SequentialWords<'a, S> {
    /// Enumerates the first `count` reduced words over `alphabet`.
    pub fn new(alphabet: &'a Alphabet<S>, count: usize) -> Self {
        let mut queue = VecDeque::new();
        if count > 0 {
            queue.push_back((Word::identity(), Transformation::identity()));
        }
        Self {
            alphabet,
            queue,
            unqueued: count.saturating_sub(1),
        }
    }
}

impl<S: Scalar> Iterator for SequentialWords<'_, S> {
    type Item = (Word, Transformation<S>);

    fn next(&mut self) -> Option<Self::Item> {
        let (word, product) = self.queue.pop_front()?;
        for (letter, matrix) in self.alphabet.letters() {
            if self.unqueued == 0 {
                break;
            }
            if !word.accepts(*letter) {
                continue;
            }
            self.queue
                .push_back((word.extended(*letter), product * matrix));
            self.unqueued -= 1;
        }
        Some((word, product))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.queue.len() + self.unqueued;
        let lower = if self.alphabet.is_empty() {
            self.queue.len()
        } else {
            upper
        };
        (lower, Some(upper))
    }
}
