//! Randomized pairwise-swap hill-climbing over substitution mappings.
//! Greedy: a candidate swap is kept only when it strictly improves the
//! fitness score. No downhill moves, no temperature.

pub mod mutation;
pub mod runner;

use crate::consts::ALPHABET_LEN;
use crate::scorer::Scorer;
use self::mutation::{apply_mapping, Mapping};

/// One in-flight hill-climb run. Owned by exactly one search; the RNG
/// is injected so runs replay deterministically under a fixed seed.
pub struct SearchState {
    pub mapping: Mapping,
    pub plaintext: String,
    pub score: i64,
    pub stagnant: usize,
    pub rng: fastrand::Rng,
}

impl SearchState {
    pub fn new(ciphertext: &str, seed: Mapping, rng: fastrand::Rng, scorer: &Scorer) -> Self {
        let plaintext = apply_mapping(ciphertext, &seed);
        let score = scorer.english_score(&plaintext);
        Self {
            mapping: seed,
            plaintext,
            score,
            stagnant: 0,
            rng,
        }
    }

    /// Runs up to `max_iter` random pairwise swaps, accepting only
    /// strict improvements and stopping early after `stagnation`
    /// consecutive non-improving attempts. Because acceptance is
    /// strict, the state always holds the best mapping seen.
    pub fn climb(
        &mut self,
        ciphertext: &str,
        scorer: &Scorer,
        max_iter: usize,
        stagnation: usize,
    ) {
        for _ in 0..max_iter {
            // Two distinct cipher letters, uniform over unordered pairs.
            let a = self.rng.usize(0..ALPHABET_LEN);
            let mut b = self.rng.usize(0..ALPHABET_LEN - 1);
            if b >= a {
                b += 1;
            }

            self.mapping.swap(a, b);
            let candidate = apply_mapping(ciphertext, &self.mapping);
            let score = scorer.english_score(&candidate);

            if score > self.score {
                self.score = score;
                self.plaintext = candidate;
                self.stagnant = 0;
            } else {
                // Revert the pair-exchange; the mapping stays a bijection.
                self.mapping.swap(a, b);
                self.stagnant += 1;
                if self.stagnant >= stagnation {
                    break;
                }
            }
        }
    }
}

/// Convenience wrapper: seed, climb, return the best snapshot.
pub fn hill_climb(
    ciphertext: &str,
    seed: Mapping,
    rng: fastrand::Rng,
    scorer: &Scorer,
    max_iter: usize,
    stagnation: usize,
) -> (i64, Mapping, String) {
    let mut state = SearchState::new(ciphertext, seed, rng, scorer);
    state.climb(ciphertext, scorer, max_iter, stagnation);
    (state.score, state.mapping, state.plaintext)
}
