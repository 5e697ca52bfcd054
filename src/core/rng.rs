//! Deterministic random number generation for round selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Forkable**: Each request draws from an independent branch
//! - **Serializable**: O(1) state capture and restore
//! - **Uniform sampling**: Partial Fisher-Yates, never comparator shuffles
//!
//! ## Usage
//!
//! ```
//! use riddle_cards::core::RiddleRng;
//!
//! let mut rng = RiddleRng::new(42);
//!
//! // Fork for one request
//! let mut request_rng = rng.fork();
//!
//! // Pick 5 distinct positions out of 20
//! let picked = request_rng.sample_indices(20, 5);
//! assert_eq!(picked.len(), 5);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct RiddleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl RiddleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Uniformly sample `count` distinct indices from `0..len`.
    ///
    /// Runs a partial Fisher-Yates shuffle over the index range and keeps the
    /// prefix. Returns fewer than `count` indices when `len < count`. Every
    /// ordered selection is equally likely.
    pub fn sample_indices(&mut self, len: usize, count: usize) -> Vec<usize> {
        let count = count.min(len);
        let mut indices: Vec<usize> = (0..len).collect();

        for i in 0..count {
            let j = self.inner.gen_range(i..len);
            indices.swap(i, j);
        }

        indices.truncate(count);
        indices
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> RiddleRngState {
        RiddleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RiddleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiddleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = RiddleRng::new(42);
        let mut rng2 = RiddleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.sample_indices(1000, 5), rng2.sample_indices(1000, 5));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = RiddleRng::new(42);
        let mut forked = rng.fork();

        let seq1 = rng.sample_indices(1000, 10);
        let seq2 = forked.sample_indices(1000, 10);

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = RiddleRng::new(42);
        let mut rng2 = RiddleRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_sample_indices_distinct_and_in_range() {
        let mut rng = RiddleRng::new(7);

        for _ in 0..200 {
            let mut picked = rng.sample_indices(12, 5);
            assert_eq!(picked.len(), 5);
            assert!(picked.iter().all(|&i| i < 12));
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 5);
        }
    }

    #[test]
    fn test_sample_indices_short_population() {
        let mut rng = RiddleRng::new(7);

        let mut picked = rng.sample_indices(3, 5);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2]);

        assert!(rng.sample_indices(0, 5).is_empty());
        assert!(rng.sample_indices(10, 0).is_empty());
    }

    #[test]
    fn test_sample_indices_roughly_uniform() {
        let mut rng = RiddleRng::new(99);
        let mut hits = [0u32; 10];

        for _ in 0..10_000 {
            for i in rng.sample_indices(10, 2) {
                hits[i] += 1;
            }
        }

        // Each index expected 2000 times.
        for &count in &hits {
            assert!((1700..2300).contains(&count), "skewed sample: {:?}", hits);
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = RiddleRng::new(42);
        let items = vec!["a", "b", "c"];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<&str> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = RiddleRng::new(42);

        for _ in 0..100 {
            rng.sample_indices(1000, 3);
        }

        let state = rng.state();
        let expected = rng.sample_indices(1000, 10);

        let mut restored = RiddleRng::from_state(&state);
        let actual = restored.sample_indices(1000, 10);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = RiddleRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: RiddleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
