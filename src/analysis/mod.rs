//! Key-length estimation and per-coset key derivation for repeating-key
//! (polyalphabetic) ciphers. Pure functions of the normalized text; no
//! shared state.

pub mod kasiski;

use crate::config::KeyLengthParams;
use crate::consts::ALPHABET_LEN;
use crate::scorer::Scorer;
use crate::text::{cosets, index_of_coincidence};

/// Average index of coincidence across the `k` cosets of `seq`, skipping
/// cosets too short to carry information. 0.0 when nothing qualifies.
pub fn average_ic_for_length(seq: &[u8], k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let ics: Vec<f64> = cosets(seq, k)
        .iter()
        .filter(|coset| coset.len() > 1)
        .map(|coset| index_of_coincidence(coset))
        .collect();
    if ics.is_empty() {
        return 0.0;
    }
    ics.iter().sum::<f64>() / ics.len() as f64
}

/// Merged, priority-ordered key-length candidates: the top `top_ic`
/// lengths by average coset IC followed by the top `top_ic` Kasiski
/// factors, deduplicated keeping first-seen order. Order matters: the
/// brute-force consumer evaluates candidates in this order.
///
/// Empty input yields no candidates.
pub fn candidate_key_lengths(seq: &[u8], params: &KeyLengthParams) -> Vec<usize> {
    if seq.is_empty() {
        return Vec::new();
    }

    let mut ic_scores: Vec<(usize, f64)> = (1..=params.max_key_length)
        .map(|k| (k, average_ic_for_length(seq, k)))
        .collect();
    // Descending IC, equal scores order by smaller length.
    ic_scores.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

    let ranked_factors = kasiski::examine(seq, params.min_seq, params.max_seq, params.max_key_length);

    let mut candidates: Vec<usize> = ic_scores
        .iter()
        .take(params.top_ic)
        .map(|&(k, _)| k)
        .chain(ranked_factors.iter().take(params.top_ic).map(|&(f, _)| f))
        .collect();

    let mut seen = vec![false; params.max_key_length + 1];
    candidates.retain(|&k| {
        if k < 1 || k > params.max_key_length || seen[k] {
            return false;
        }
        seen[k] = true;
        true
    });
    candidates
}

/// Derives the most likely repeating key of length `k`: each coset's
/// best Caesar shift under chi-square, encoded as a letter (shift 0 is
/// 'A'). Empty cosets score infinity for every shift, so their slot
/// falls back to 'A' (first minimum wins); with degenerate input that
/// choice is arbitrary by construction.
pub fn solve_polyalphabetic_key(seq: &[u8], k: usize, scorer: &Scorer) -> String {
    let mut key = String::with_capacity(k);
    for coset in cosets(seq, k) {
        let best_shift = (0..ALPHABET_LEN as u8)
            .min_by(|&a, &b| {
                scorer
                    .chi_square(&coset, a)
                    .total_cmp(&scorer.chi_square(&coset, b))
            })
            .unwrap_or(0);
        key.push((b'A' + best_shift) as char);
    }
    key
}
