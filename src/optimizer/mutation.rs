//! Seed construction for the monoalphabetic hill-climb. A Mapping is a
//! cipher-to-plain bijection stored as `[u8; 26]`: `mapping[c]` is the
//! plain letter index assigned to cipher letter index `c`. Every
//! mutation is an atomic pair-exchange, so bijectivity cannot lapse.

use crate::consts::{ALPHABET_LEN, ENGLISH_BY_RANK};
use crate::scorer::Scorer;
use fastrand::Rng;
use itertools::Itertools;

pub type Mapping = [u8; ALPHABET_LEN];

/// Builds the frequency-rank seed: cipher letters ranked by observed
/// count are matched positionally against English letters ranked by
/// canonical frequency. Cipher letters absent from the text take the
/// unused plain letters in alphabetical order, so the result is a total
/// bijection even for short or degenerate ciphertexts.
pub fn frequency_seed(seq: &[u8], scorer: &Scorer) -> Mapping {
    let ranked = scorer.observed_rank(seq);

    let mut mapping = [u8::MAX; ALPHABET_LEN];
    let mut plain_used = [false; ALPHABET_LEN];

    for (rank, &cipher_idx) in ranked.iter().enumerate() {
        let plain_idx = ENGLISH_BY_RANK[rank] - b'A';
        mapping[cipher_idx as usize] = plain_idx;
        plain_used[plain_idx as usize] = true;
    }

    // Alphabetical fallback for letters the ciphertext never used.
    let mut unused = (0..ALPHABET_LEN as u8).filter(|&p| !plain_used[p as usize]);
    for slot in mapping.iter_mut().filter(|slot| **slot == u8::MAX) {
        // Exactly as many unused plain letters as unassigned slots.
        *slot = unused.next().unwrap_or(0);
    }
    mapping
}

/// The frequency seed plus up to `cap` variants made by swapping the
/// assignments of pairs drawn from the `pool` highest-frequency cipher
/// letters. Rank alignment being off by a position or two is the common
/// failure mode of pure frequency matching; these variants hedge it.
pub fn seed_pool(
    seq: &[u8],
    scorer: &Scorer,
    rng: &mut Rng,
    pool: usize,
    cap: usize,
) -> Vec<Mapping> {
    let base = frequency_seed(seq, scorer);
    let mut seeds = vec![base];

    let ranked = scorer.observed_rank(seq);
    let top: Vec<u8> = ranked.into_iter().take(pool).collect();

    let mut pairs: Vec<(u8, u8)> = top.iter().copied().tuple_combinations().collect();
    rng.shuffle(&mut pairs);
    pairs.truncate(cap);

    for (a, b) in pairs {
        let mut variant = base;
        variant.swap(a as usize, b as usize);
        seeds.push(variant);
    }
    seeds
}

/// Decrypts with a cipher-to-plain mapping directly, preserving case
/// and passing non-alphabetic characters through.
pub fn apply_mapping(text: &str, mapping: &Mapping) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let idx = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                let plain = b'A' + mapping[idx];
                if c.is_ascii_uppercase() {
                    plain as char
                } else {
                    plain.to_ascii_lowercase() as char
                }
            } else {
                c
            }
        })
        .collect()
}
