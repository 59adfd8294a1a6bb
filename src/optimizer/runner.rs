//! The brute-force orchestrators: drive the solvers over all seeds,
//! restarts and candidate key lengths, then rank what comes back. Every
//! run is an independent computation over an immutable view of the
//! ciphertext, so the runs fan out across the rayon pool and only the
//! final merge is sequential.

use crate::analysis::{candidate_key_lengths, solve_polyalphabetic_key};
use crate::cipher::{vigenere_decrypt, SubstitutionKey};
use crate::config::{Config, KeyLengthParams};
use crate::consts::SEED_SWAP_POOL;
use crate::optimizer::mutation::{seed_pool, Mapping};
use crate::optimizer::SearchState;
use crate::scorer::Scorer;
use crate::text::normalize;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A ranked recovery: fitness score, key string, decrypted plaintext.
/// For monoalphabetic results the key is the full 26-letter substitution
/// alphabet accepted by `cipher::decrypt`; for polyalphabetic results it
/// is the repeating key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub score: i64,
    pub key: String,
    pub plaintext: String,
}

pub struct SolverOptions {
    pub max_iter: usize,
    pub stagnation: usize,
    pub restarts_per_seed: usize,
    pub extra_seeds: usize,
    pub top_mono: usize,
    pub top_poly: usize,
    pub lengths: KeyLengthParams,
    pub seed: Option<u64>,
}

impl From<&Config> for SolverOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_iter: cfg.search.max_iter,
            stagnation: cfg.search.stagnation,
            restarts_per_seed: cfg.search.restarts_per_seed,
            extra_seeds: cfg.search.extra_seeds,
            top_mono: cfg.search.top_mono,
            top_poly: cfg.search.top_poly,
            lengths: cfg.lengths.clone(),
            seed: None,
        }
    }
}

fn run_rng(seed: Option<u64>, offset: u64) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s + offset),
        None => fastrand::Rng::new(),
    }
}

/// Score descending; equal scores order by lexicographically smaller
/// key so rankings are stable across thread scheduling.
fn rank(results: &mut Vec<Candidate>, top_n: usize) {
    results.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
    results.truncate(top_n);
}

/// Monoalphabetic recovery: frequency-rank seeds, swap-variant seeds,
/// `restarts_per_seed` hill-climbs per seed, then insert-or-improve
/// deduplication by key string.
pub fn brute_force_monoalphabetic(
    ciphertext: &str,
    scorer: &Scorer,
    opts: &SolverOptions,
) -> Vec<Candidate> {
    let seq = normalize(ciphertext);
    if seq.is_empty() {
        return Vec::new();
    }

    let mut pool_rng = run_rng(opts.seed, 0);
    let seeds = seed_pool(&seq, scorer, &mut pool_rng, SEED_SWAP_POOL, opts.extra_seeds);

    let runs: Vec<(u64, Mapping)> = seeds
        .iter()
        .flat_map(|&seed| (0..opts.restarts_per_seed).map(move |_| seed))
        .enumerate()
        .map(|(idx, seed)| (idx as u64, seed))
        .collect();

    info!(
        "Monoalphabetic search: {} seeds x {} restarts = {} runs",
        seeds.len(),
        opts.restarts_per_seed,
        runs.len()
    );

    let outcomes: Vec<(i64, Mapping, String)> = runs
        .par_iter()
        .map(|&(run_idx, seed)| {
            let rng = run_rng(opts.seed, 1000 + run_idx);
            let mut state = SearchState::new(ciphertext, seed, rng, scorer);
            state.climb(ciphertext, scorer, opts.max_iter, opts.stagnation);
            (state.score, state.mapping, state.plaintext)
        })
        .collect();

    // Insert-or-improve: runs converging on the same key collapse to the
    // best-scoring entry in a single pass.
    let mut best: HashMap<String, Candidate> = HashMap::new();
    for (score, mapping, plaintext) in outcomes {
        let key = SubstitutionKey::from_mapping(&mapping).to_string();
        match best.entry(key) {
            Entry::Occupied(mut occupied) => {
                if score > occupied.get().score {
                    let existing = occupied.get_mut();
                    existing.score = score;
                    existing.plaintext = plaintext;
                }
            }
            Entry::Vacant(vacant) => {
                let key = vacant.key().clone();
                vacant.insert(Candidate {
                    score,
                    key,
                    plaintext,
                });
            }
        }
    }

    debug!("{} distinct keys survived deduplication", best.len());

    let mut results: Vec<Candidate> = best.into_values().collect();
    rank(&mut results, opts.top_mono);
    results
}

/// Polyalphabetic recovery: every candidate key length gets one derived
/// key, one decryption and one fitness score.
pub fn brute_force_polyalphabetic(
    ciphertext: &str,
    scorer: &Scorer,
    opts: &SolverOptions,
) -> Vec<Candidate> {
    let seq = normalize(ciphertext);
    if seq.is_empty() {
        return Vec::new();
    }

    let lengths = candidate_key_lengths(&seq, &opts.lengths);
    info!("Polyalphabetic search: candidate lengths {:?}", lengths);

    let mut results: Vec<Candidate> = lengths
        .par_iter()
        .filter_map(|&k| {
            let key = solve_polyalphabetic_key(&seq, k, scorer);
            match vigenere_decrypt(ciphertext, &key) {
                Ok(plaintext) => {
                    let score = scorer.english_score(&plaintext);
                    Some(Candidate {
                        score,
                        key,
                        plaintext,
                    })
                }
                // Derived keys are always valid letters; tolerate the
                // primitive's rejection anyway rather than poison the run.
                Err(e) => {
                    warn!("Skipping key length {}: {}", k, e);
                    None
                }
            }
        })
        .collect();

    rank(&mut results, opts.top_poly);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> SolverOptions {
        SolverOptions::from(&Config::default())
    }

    #[test]
    fn empty_input_yields_empty_results() {
        let scorer = Scorer::default();
        let opts = options();
        assert!(brute_force_monoalphabetic("", &scorer, &opts).is_empty());
        assert!(brute_force_polyalphabetic("", &scorer, &opts).is_empty());
        assert!(brute_force_monoalphabetic("42! ...", &scorer, &opts).is_empty());
    }

    #[test]
    fn mono_results_are_deduplicated_and_sorted() {
        let scorer = Scorer::default();
        let mut opts = options();
        opts.seed = Some(11);
        let results =
            brute_force_monoalphabetic("WKH FDW VDW RQ WKH PDW", &scorer, &opts);
        assert!(!results.is_empty());
        assert!(results.len() <= opts.top_mono);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        let mut keys: Vec<&str> = results.iter().map(|c| c.key.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), results.len());
    }
}
