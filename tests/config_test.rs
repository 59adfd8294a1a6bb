use cipherbreak::config::{Config, KeyLengthParams, SearchParams};
use cipherbreak::consts;
use cipherbreak::optimizer::runner::SolverOptions;

#[test]
fn defaults_match_the_documented_constants() {
    let lengths = KeyLengthParams::default();
    assert_eq!(lengths.min_seq, consts::DEFAULT_MIN_SEQ);
    assert_eq!(lengths.max_seq, consts::DEFAULT_MAX_SEQ);
    assert_eq!(lengths.max_key_length, consts::DEFAULT_MAX_KEY_LENGTH);
    assert_eq!(lengths.top_ic, consts::DEFAULT_TOP_IC);

    let search = SearchParams::default();
    assert_eq!(search.max_iter, consts::DEFAULT_MAX_ITER);
    assert_eq!(search.stagnation, consts::DEFAULT_STAGNATION);
    assert_eq!(search.restarts_per_seed, consts::DEFAULT_RESTARTS_PER_SEED);
    assert_eq!(search.extra_seeds, consts::DEFAULT_EXTRA_SEEDS);
    assert_eq!(search.top_mono, consts::DEFAULT_TOP_MONO);
    assert_eq!(search.top_poly, consts::DEFAULT_TOP_POLY);
}

#[test]
fn solver_options_mirror_the_config() {
    let cfg = Config::default();
    let opts = SolverOptions::from(&cfg);
    assert_eq!(opts.max_iter, cfg.search.max_iter);
    assert_eq!(opts.stagnation, cfg.search.stagnation);
    assert_eq!(opts.restarts_per_seed, cfg.search.restarts_per_seed);
    assert_eq!(opts.top_mono, cfg.search.top_mono);
    assert_eq!(opts.top_poly, cfg.search.top_poly);
    assert_eq!(opts.lengths.max_key_length, cfg.lengths.max_key_length);
    assert!(opts.seed.is_none());
}

#[test]
fn reference_frequency_table_is_a_distribution() {
    let total: f64 = consts::ENGLISH_FREQS.iter().sum();
    assert!((total - 1.0).abs() < 0.01, "frequencies sum to {}", total);
    // E is the most frequent letter.
    let e = consts::ENGLISH_FREQS[(b'E' - b'A') as usize];
    assert!(consts::ENGLISH_FREQS.iter().all(|&f| f <= e));
}
