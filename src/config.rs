use crate::consts;
use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub lengths: KeyLengthParams,
    #[command(flatten)]
    pub search: SearchParams,
}

/// Tuning for the key-length estimator (polyalphabetic ciphers).
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct KeyLengthParams {
    #[arg(long, default_value_t = consts::DEFAULT_MIN_SEQ)]
    pub min_seq: usize,
    #[arg(long, default_value_t = consts::DEFAULT_MAX_SEQ)]
    pub max_seq: usize,
    #[arg(long, default_value_t = consts::DEFAULT_MAX_KEY_LENGTH)]
    pub max_key_length: usize,
    #[arg(long, default_value_t = consts::DEFAULT_TOP_IC)]
    pub top_ic: usize,
}

impl Default for KeyLengthParams {
    fn default() -> Self {
        Self {
            min_seq: consts::DEFAULT_MIN_SEQ,
            max_seq: consts::DEFAULT_MAX_SEQ,
            max_key_length: consts::DEFAULT_MAX_KEY_LENGTH,
            top_ic: consts::DEFAULT_TOP_IC,
        }
    }
}

/// Tuning for the monoalphabetic hill-climb search.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    #[arg(long, default_value_t = consts::DEFAULT_MAX_ITER)]
    pub max_iter: usize,
    #[arg(long, default_value_t = consts::DEFAULT_STAGNATION)]
    pub stagnation: usize,
    #[arg(long, default_value_t = consts::DEFAULT_RESTARTS_PER_SEED)]
    pub restarts_per_seed: usize,
    #[arg(long, default_value_t = consts::DEFAULT_EXTRA_SEEDS)]
    pub extra_seeds: usize,
    #[arg(long, default_value_t = consts::DEFAULT_TOP_MONO)]
    pub top_mono: usize,
    #[arg(long, default_value_t = consts::DEFAULT_TOP_POLY)]
    pub top_poly: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_iter: consts::DEFAULT_MAX_ITER,
            stagnation: consts::DEFAULT_STAGNATION,
            restarts_per_seed: consts::DEFAULT_RESTARTS_PER_SEED,
            extra_seeds: consts::DEFAULT_EXTRA_SEEDS,
            top_mono: consts::DEFAULT_TOP_MONO,
            top_poly: consts::DEFAULT_TOP_POLY,
        }
    }
}
