//! The objective functions driving every search and ranking decision:
//! a cheap English-likeness fitness score and the chi-square statistic
//! used for per-coset shift fitting.

pub mod loader;

use crate::consts::{ALPHABET_LEN, COMMON_LETTERS, COMMON_WORDS, ENGLISH_FREQS, WORD_WEIGHT};
use crate::text::frequency_table;

/// Holds the reference English distribution and the padded common-word
/// list. Built once per process; the tables are immutable afterwards.
pub struct Scorer {
    pub english_freqs: [f64; ALPHABET_LEN],
    common_words: Vec<String>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(
            ENGLISH_FREQS,
            COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
        )
    }
}

impl Scorer {
    pub fn new(english_freqs: [f64; ALPHABET_LEN], common_words: Vec<String>) -> Self {
        // Words are matched with surrounding spaces so "the" never hits
        // inside "weather".
        let common_words = common_words
            .into_iter()
            .map(|w| format!(" {} ", w.trim().to_lowercase()))
            .collect();
        Self {
            english_freqs,
            common_words,
        }
    }

    /// English-likeness fitness: WORD_WEIGHT per common-word occurrence
    /// plus one point per common-letter occurrence. A cheap proxy, not a
    /// language model; it runs inside the hill-climb's inner loop.
    /// Higher is more English-like. Empty text scores 0.
    pub fn english_score(&self, text: &str) -> i64 {
        let padded = format!(" {} ", text.to_lowercase());
        let mut score = 0i64;
        for word in &self.common_words {
            score += padded.matches(word.as_str()).count() as i64 * WORD_WEIGHT;
        }
        for &b in padded.as_bytes() {
            if COMMON_LETTERS.contains(&b) {
                score += 1;
            }
        }
        score
    }

    /// Chi-square goodness of fit for a coset under an assumed Caesar
    /// shift: the coset is un-shifted by `shift`, then its distribution
    /// is compared against the reference English frequencies. Lower is
    /// better; 0 only for a perfect match. An empty coset carries no
    /// information and scores infinity for every shift.
    pub fn chi_square(&self, coset: &[u8], shift: u8) -> f64 {
        if coset.is_empty() {
            return f64::INFINITY;
        }
        let mut shifted = [0u32; ALPHABET_LEN];
        for &b in coset {
            let idx = (b - b'A' + ALPHABET_LEN as u8 - shift) % ALPHABET_LEN as u8;
            shifted[idx as usize] += 1;
        }
        let n = coset.len() as f64;
        let mut score = 0.0;
        for (idx, &freq) in self.english_freqs.iter().enumerate() {
            let expected = freq * n;
            if expected > 0.0 {
                let observed = shifted[idx] as f64;
                score += (observed - expected).powi(2) / expected;
            }
        }
        score
    }

    /// Letters of a sequence ranked by descending observed count, ties
    /// broken alphabetically. Letters absent from the sequence are not
    /// included.
    pub fn observed_rank(&self, seq: &[u8]) -> Vec<u8> {
        let counts = frequency_table(seq);
        let mut present: Vec<(u32, u8)> = counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(idx, &c)| (c, idx as u8))
            .collect();
        present.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        present.into_iter().map(|(_, idx)| idx).collect()
    }
}
