//! Kasiski examination: repeated substrings of a repeating-key cipher
//! tend to sit a multiple of the key length apart, so factoring the
//! gaps between repeats votes for likely key lengths.

use std::collections::HashMap;

/// Scans substring windows of length `min_seq..=max_seq`, measures the
/// distance between consecutive occurrences of each repeated substring,
/// and votes for every factor in `[2, max_key_length]` dividing a
/// distance. Returns `(factor, votes)` ranked by descending votes,
/// equal votes ordered by smaller factor.
pub fn examine(
    seq: &[u8],
    min_seq: usize,
    max_seq: usize,
    max_key_length: usize,
) -> Vec<(usize, u32)> {
    let mut positions: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for size in min_seq.max(1)..=max_seq.min(seq.len()) {
        for (start, window) in seq.windows(size).enumerate() {
            positions.entry(window).or_default().push(start);
        }
    }

    // Only gaps between consecutive occurrences; windows() yields
    // positions already sorted.
    let mut distances = Vec::new();
    for starts in positions.values() {
        if starts.len() < 2 {
            continue;
        }
        for pair in starts.windows(2) {
            distances.push(pair[1] - pair[0]);
        }
    }

    let mut votes = vec![0u32; max_key_length + 1];
    for d in distances {
        for (factor, count) in votes.iter_mut().enumerate().skip(2) {
            if d % factor == 0 {
                *count += 1;
            }
        }
    }

    let mut ranked: Vec<(usize, u32)> = votes
        .into_iter()
        .enumerate()
        .skip(2)
        .filter(|&(_, count)| count > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
}
