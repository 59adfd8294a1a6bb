//! Deterministic substitution primitives. These are table lookups, not
//! cryptanalysis: the solvers derive keys, then feed them back through
//! here to produce candidate plaintexts.

use crate::consts::ALPHABET_LEN;
use crate::error::{CbResult, CipherBreakError};
use std::fmt;

/// A validated monoalphabetic substitution alphabet.
/// `key[i]` is the cipher letter standing in for plain letter `'A' + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionKey([u8; ALPHABET_LEN]);

impl SubstitutionKey {
    /// Parses a key string. Non-letters are ignored; what remains must
    /// be exactly 26 letters covering the alphabet once each.
    pub fn parse(raw: &str) -> CbResult<Self> {
        let letters: Vec<u8> = raw
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_uppercase() as u8)
            .collect();
        if letters.len() != ALPHABET_LEN {
            return Err(CipherBreakError::InvalidKey(format!(
                "expected 26 letters, got {}",
                letters.len()
            )));
        }
        let mut seen = [false; ALPHABET_LEN];
        for &b in &letters {
            let idx = (b - b'A') as usize;
            if seen[idx] {
                return Err(CipherBreakError::InvalidKey(format!(
                    "duplicate letter '{}'",
                    b as char
                )));
            }
            seen[idx] = true;
        }
        let mut table = [0u8; ALPHABET_LEN];
        table.copy_from_slice(&letters);
        Ok(Self(table))
    }

    /// Builds a key from a cipher-to-plain mapping (`mapping[c]` is the
    /// plain letter index for cipher letter index `c`), inverting it
    /// into the plain-to-cipher alphabet this key stores.
    ///
    /// Callers guarantee the mapping is a bijection; the solvers only
    /// ever produce pair-exchanges of one, so a violation here is a
    /// programming error.
    pub fn from_mapping(mapping: &[u8; ALPHABET_LEN]) -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        for (cipher_idx, &plain_idx) in mapping.iter().enumerate() {
            table[plain_idx as usize] = b'A' + cipher_idx as u8;
        }
        Self(table)
    }

    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

fn substitute(text: &str, table: &[u8; ALPHABET_LEN]) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let idx = (c.to_ascii_uppercase() as u8 - b'A') as usize;
                let out = table[idx];
                if c.is_ascii_uppercase() {
                    out as char
                } else {
                    out.to_ascii_lowercase() as char
                }
            } else {
                c
            }
        })
        .collect()
}

/// Monoalphabetic encryption. Case is preserved; non-alphabetic
/// characters pass through untouched.
pub fn encrypt(plaintext: &str, key: &SubstitutionKey) -> String {
    substitute(plaintext, key.as_bytes())
}

/// Monoalphabetic decryption with the same key used to encrypt.
pub fn decrypt(ciphertext: &str, key: &SubstitutionKey) -> String {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (plain_idx, &cipher) in key.as_bytes().iter().enumerate() {
        inverse[(cipher - b'A') as usize] = b'A' + plain_idx as u8;
    }
    substitute(ciphertext, &inverse)
}

fn validate_vigenere_key(key: &str) -> CbResult<Vec<u8>> {
    let shifts: Vec<u8> = key
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase() as u8 - b'A')
        .collect();
    if shifts.is_empty() {
        return Err(CipherBreakError::InvalidKey(
            "repeating key must contain at least one letter".into(),
        ));
    }
    Ok(shifts)
}

fn vigenere(text: &str, key: &str, decrypting: bool) -> CbResult<String> {
    let shifts = validate_vigenere_key(key)?;
    let mut key_idx = 0usize;
    let out = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shift = shifts[key_idx % shifts.len()];
                key_idx += 1;
                let base = c.to_ascii_uppercase() as u8 - b'A';
                let moved = if decrypting {
                    (base + ALPHABET_LEN as u8 - shift) % ALPHABET_LEN as u8
                } else {
                    (base + shift) % ALPHABET_LEN as u8
                };
                let upper = b'A' + moved;
                if c.is_ascii_uppercase() {
                    upper as char
                } else {
                    upper.to_ascii_lowercase() as char
                }
            } else {
                c
            }
        })
        .collect();
    Ok(out)
}

/// Repeating-key (Vigenere) encryption. The key index advances only on
/// alphabetic characters, so punctuation does not desynchronize cosets.
pub fn vigenere_encrypt(plaintext: &str, key: &str) -> CbResult<String> {
    vigenere(plaintext, key, false)
}

/// Repeating-key (Vigenere) decryption.
pub fn vigenere_decrypt(ciphertext: &str, key: &str) -> CbResult<String> {
    vigenere(ciphertext, key, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_validation_rejects_short_and_duplicate() {
        assert!(SubstitutionKey::parse("ABC").is_err());
        assert!(SubstitutionKey::parse("AABCDEFGHIJKLMNOPQRSTUVWXY").is_err());
        assert!(SubstitutionKey::parse("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_ok());
    }

    #[test]
    fn mono_round_trip_preserves_case_and_punctuation() {
        let key = SubstitutionKey::parse("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
        let text = "Attack at Dawn! (co-ordinates: 4,2)";
        let enc = encrypt(text, &key);
        assert_ne!(enc, text);
        assert_eq!(decrypt(&enc, &key), text);
    }

    #[test]
    fn caesar_shift_three_key() {
        // DEFG... is the classic shift-3 alphabet.
        let key = SubstitutionKey::parse("DEFGHIJKLMNOPQRSTUVWXYZABC").unwrap();
        assert_eq!(encrypt("THANK YOU", &key), "WKDQN BRX");
        assert_eq!(decrypt("WKDQN BRX", &key), "THANK YOU");
    }

    #[test]
    fn vigenere_round_trip() {
        let text = "Meet me at the usual place, at noon.";
        let enc = vigenere_encrypt(text, "LEMON").unwrap();
        assert_eq!(vigenere_decrypt(&enc, "LEMON").unwrap(), text);
    }

    #[test]
    fn vigenere_key_skips_non_letters_in_text() {
        let enc = vigenere_encrypt("AB CD", "BB").unwrap();
        assert_eq!(enc, "BC DE");
    }

    #[test]
    fn vigenere_rejects_empty_key() {
        assert!(vigenere_encrypt("HELLO", "123").is_err());
    }
}
