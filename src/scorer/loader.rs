//! Optional corpus overrides for the built-in reference tables. CSV in,
//! lenient parsing: malformed rows are skipped, not fatal.

use crate::consts::ALPHABET_LEN;
use crate::error::{CbResult, CipherBreakError};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Loads a letter-frequency table from a `letter,frequency` CSV.
/// Missing letters keep frequency 0.0; the table must have at least one
/// positive entry to be usable.
pub fn load_frequency_table<P: AsRef<Path>>(path: P) -> CbResult<[f64; ALPHABET_LEN]> {
    let file = File::open(&path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let mut freqs = [0.0f64; ALPHABET_LEN];
    let mut rows = 0usize;

    for record in rdr.records().flatten() {
        if record.len() < 2 {
            continue;
        }
        let letter = record[0].trim();
        let Some(c) = letter.chars().next() else {
            continue;
        };
        if letter.chars().count() != 1 || !c.is_ascii_alphabetic() {
            continue;
        }
        if let Ok(freq) = record[1].trim().parse::<f64>() {
            if freq.is_finite() && freq >= 0.0 {
                freqs[(c.to_ascii_uppercase() as u8 - b'A') as usize] = freq;
                rows += 1;
            }
        }
    }

    debug!("Parsed {} frequency rows from {:?}", rows, path.as_ref());

    let total: f64 = freqs.iter().sum();
    if total <= 0.0 {
        return Err(CipherBreakError::Config(format!(
            "frequency table {:?} has no positive entries",
            path.as_ref()
        )));
    }
    // Normalize so chi-square expectations stay proportional regardless
    // of whether the file holds counts or proportions.
    for f in &mut freqs {
        *f /= total;
    }

    info!("Loaded frequency table from {:?}", path.as_ref());
    Ok(freqs)
}

/// Loads a common-word list from a one-word-per-row CSV (extra columns
/// such as counts are ignored).
pub fn load_common_words<P: AsRef<Path>>(path: P) -> CbResult<Vec<String>> {
    let file = File::open(&path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(file);

    let mut words = Vec::new();
    for record in rdr.records().flatten() {
        if record.is_empty() {
            continue;
        }
        let word = record[0].trim();
        if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word.to_lowercase());
        }
    }

    if words.is_empty() {
        return Err(CipherBreakError::Config(format!(
            "word list {:?} is empty",
            path.as_ref()
        )));
    }

    info!("Loaded {} common words from {:?}", words.len(), path.as_ref());
    Ok(words)
}
