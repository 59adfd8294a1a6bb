/// Number of symbols in the working alphabet (A-Z).
pub const ALPHABET_LEN: usize = 26;

/// Relative frequency of each letter in English prose, indexed A=0..Z=25.
/// Values sum to ~1.0.
pub const ENGLISH_FREQS: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// English letters ordered by descending frequency. Used to align
/// frequency ranks when seeding a monoalphabetic mapping.
pub const ENGLISH_BY_RANK: &[u8; ALPHABET_LEN] = b"ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Short function words that dominate English text. Each space-delimited
/// occurrence is worth WORD_WEIGHT fitness points.
pub const COMMON_WORDS: [&str; 16] = [
    "the", "and", "to", "of", "that", "is", "in", "it", "for", "you", "with", "on", "have", "be",
    "as", "at",
];

/// The twelve most frequent English letters; each occurrence is worth
/// one fitness point.
pub const COMMON_LETTERS: &[u8] = b"etaoinshrdlu";

/// Fitness weight of a common-word hit relative to a common-letter hit.
pub const WORD_WEIGHT: i64 = 10;

/// Index of coincidence of typical English text.
pub const ENGLISH_IC: f64 = 0.065;

/// Index of coincidence of uniform random 26-symbol text.
pub const UNIFORM_IC: f64 = 0.038;

/// Largest repeating-key length the estimator will consider.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 16;

/// Shortest repeated substring examined by Kasiski.
pub const DEFAULT_MIN_SEQ: usize = 3;

/// Longest repeated substring examined by Kasiski.
pub const DEFAULT_MAX_SEQ: usize = 5;

/// How many top-ranked lengths each estimator (IC, Kasiski) contributes
/// to the merged candidate list.
pub const DEFAULT_TOP_IC: usize = 5;

/// Hill-climb iteration cap per run.
pub const DEFAULT_MAX_ITER: usize = 2000;

/// Consecutive non-improving swaps before a hill-climb run stops early.
pub const DEFAULT_STAGNATION: usize = 400;

/// Hill-climb runs per seed mapping.
pub const DEFAULT_RESTARTS_PER_SEED: usize = 3;

/// Extra seed mappings generated by swapping high-frequency assignments.
pub const DEFAULT_EXTRA_SEEDS: usize = 6;

/// How many of the highest-frequency cipher letters feed the swap-pair
/// seed pool.
pub const SEED_SWAP_POOL: usize = 6;

/// Result list caps.
pub const DEFAULT_TOP_MONO: usize = 5;
pub const DEFAULT_TOP_POLY: usize = 10;
