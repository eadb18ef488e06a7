// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Stateful `xoroshiro128+` generator driving random-walk orbits.
///
/// * Not cryptographically secure.
/// * Owned by the caller and passed by `&mut` into each random-mode call, so
///   matching seeds replay identical walks on every supported platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prng {
    state: [u64; 2],
}

const ZERO_STATE_REPLACEMENT: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Constructs a generator from two 64-bit seeds.
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state == [0, 0] {
            state[0] = ZERO_STATE_REPLACEMENT;
        }
        Self { state }
    }

    /// Constructs a generator from a single seed via SplitMix64 expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let first = splitmix64(&mut sm_state);
        let second = splitmix64(&mut sm_state);
        Self::from_seed(first, second)
    }

    /// Next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    /// Uniform index in `0..bound`; `bound` must be non-zero.
    ///
    /// Rejection sampling keeps every index equally likely.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index needs a non-empty range");
        let span = bound.max(1) as u64;
        if span == 1 {
            return 0;
        }

        let value = if span.is_power_of_two() {
            self.next_u64() & (span - 1)
        } else {
            let limit = u64::MAX - u64::MAX % span;
            loop {
                let candidate = self.next_u64();
                if candidate < limit {
                    break candidate % span;
                }
            }
        };

        // value < span == bound, so the conversion is lossless.
        usize::try_from(value).unwrap_or(0)
    }
}
