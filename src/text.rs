//! Text normalization and single-symbol statistics. Every positional
//! statistic downstream (Kasiski distances, coset indices) is defined
//! over the normalized sequence, not the raw input.

use crate::consts::ALPHABET_LEN;

/// Strips input to an uppercase ASCII letter sequence. Non-alphabetic
/// characters are dropped, not replaced, so positions are compacted.
pub fn normalize(raw: &str) -> Vec<u8> {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8)
        .collect()
}

/// Per-letter occurrence counts, indexed A=0..Z=25. An empty sequence
/// yields an all-zero table; callers must treat that as "no
/// distribution", not a uniform one.
pub fn frequency_table(seq: &[u8]) -> [u32; ALPHABET_LEN] {
    let mut counts = [0u32; ALPHABET_LEN];
    for &b in seq {
        counts[(b - b'A') as usize] += 1;
    }
    counts
}

/// Index of coincidence: probability that two distinct positions hold
/// the same letter. ~0.065 for English, ~0.038 for uniform noise.
/// Defined as 0.0 for sequences shorter than 2 symbols.
pub fn index_of_coincidence(seq: &[u8]) -> f64 {
    let n = seq.len();
    if n <= 1 {
        return 0.0;
    }
    let counts = frequency_table(seq);
    let matches: u64 = counts
        .iter()
        .map(|&c| c as u64 * (c as u64).saturating_sub(1))
        .sum();
    matches as f64 / (n as f64 * (n as f64 - 1.0))
}

/// Splits a sequence into `k` cosets by position modulo `k`. Under a
/// repeating key of length `k`, each coset was encrypted with a single
/// fixed shift.
pub fn cosets(seq: &[u8], k: usize) -> Vec<Vec<u8>> {
    if k == 0 {
        return Vec::new();
    }
    let mut buckets = vec![Vec::with_capacity(seq.len() / k + 1); k];
    for (idx, &b) in seq.iter().enumerate() {
        buckets[idx % k].push(b);
    }
    buckets
}
