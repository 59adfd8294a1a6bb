use cipherbreak::cipher::{decrypt, encrypt, SubstitutionKey};
use cipherbreak::consts::ALPHABET_LEN;
use cipherbreak::optimizer::mutation::frequency_seed;
use cipherbreak::scorer::Scorer;
use cipherbreak::text::{cosets, index_of_coincidence, normalize};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_letter_seq()(bytes in proptest::collection::vec(0u8..26, 0..400)) -> Vec<u8> {
        bytes.into_iter().map(|b| b + b'A').collect()
    }
}

prop_compose! {
    fn arb_permutation_key()(seed in any::<u64>()) -> SubstitutionKey {
        let mut alphabet: Vec<u8> = (b'A'..=b'Z').collect();
        let mut rng = fastrand::Rng::with_seed(seed);
        rng.shuffle(&mut alphabet);
        let key_str: String = alphabet.iter().map(|&b| b as char).collect();
        SubstitutionKey::parse(&key_str).expect("shuffled alphabet is a valid key")
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn ic_stays_in_unit_interval(seq in arb_letter_seq()) {
        let ic = index_of_coincidence(&seq);
        prop_assert!((0.0..=1.0).contains(&ic));
    }

    #[test]
    fn cosets_reassemble_to_original(seq in arb_letter_seq(), k in 1usize..20) {
        let parts = cosets(&seq, k);
        let mut rebuilt = vec![0u8; seq.len()];
        for (residue, part) in parts.iter().enumerate() {
            for (row, &b) in part.iter().enumerate() {
                rebuilt[row * k + residue] = b;
            }
        }
        prop_assert_eq!(rebuilt, seq);
    }

    #[test]
    fn chi_square_is_non_negative(seq in arb_letter_seq(), shift in 0u8..26) {
        let scorer = Scorer::default();
        let score = scorer.chi_square(&seq, shift);
        prop_assert!(score >= 0.0);
    }

    #[test]
    fn frequency_seed_is_always_a_total_bijection(raw in ".*") {
        let scorer = Scorer::default();
        let seq = normalize(&raw);
        let mapping = frequency_seed(&seq, &scorer);
        let mut seen = [false; ALPHABET_LEN];
        for &p in &mapping {
            prop_assert!((p as usize) < ALPHABET_LEN);
            prop_assert!(!seen[p as usize], "plain letter assigned twice");
            seen[p as usize] = true;
        }
    }

    #[test]
    fn substitution_round_trips(text in ".*", key in arb_permutation_key()) {
        let ciphertext = encrypt(&text, &key);
        prop_assert_eq!(decrypt(&ciphertext, &key), text);
    }

    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let once = normalize(&raw);
        let as_str: String = once.iter().map(|&b| b as char).collect();
        prop_assert_eq!(normalize(&as_str), once);
    }
}
