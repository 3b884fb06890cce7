//! Fixed letter statistics and phonotactic templates
//!
//! Weights are relative, approximating English usage (percent of letters for
//! single letters, percent of bigrams for pairs).

/// One slot of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Consonant,
    Vowel,
    /// A common two-letter sequence, contributes 2 characters
    Pair,
}

use self::Token::{Consonant as C, Pair as P, Vowel as V};

/// The 21 consonants
pub const CONSONANTS: [(u8, f64); 21] = [
    (b'b', 1.49),
    (b'c', 2.78),
    (b'd', 4.25),
    (b'f', 2.23),
    (b'g', 2.02),
    (b'h', 6.09),
    (b'j', 0.15),
    (b'k', 0.77),
    (b'l', 4.03),
    (b'm', 2.41),
    (b'n', 6.75),
    (b'p', 1.93),
    (b'q', 0.10),
    (b'r', 5.99),
    (b's', 6.33),
    (b't', 9.06),
    (b'v', 0.98),
    (b'w', 2.36),
    (b'x', 0.15),
    (b'y', 1.97),
    (b'z', 0.07),
];

pub const VOWELS: [(u8, f64); 5] = [
    (b'a', 8.17),
    (b'e', 12.70),
    (b'i', 6.97),
    (b'o', 7.51),
    (b'u', 2.76),
];

/// Common English letter pairs
pub const PAIRS: [(&str, f64); 50] = [
    ("th", 3.56),
    ("he", 3.07),
    ("in", 2.43),
    ("er", 2.05),
    ("an", 1.99),
    ("re", 1.85),
    ("on", 1.76),
    ("at", 1.49),
    ("en", 1.45),
    ("nd", 1.35),
    ("ti", 1.34),
    ("es", 1.34),
    ("or", 1.28),
    ("te", 1.20),
    ("of", 1.17),
    ("ed", 1.17),
    ("is", 1.13),
    ("it", 1.12),
    ("al", 1.09),
    ("ar", 1.07),
    ("st", 1.05),
    ("to", 1.04),
    ("nt", 1.04),
    ("ng", 0.95),
    ("se", 0.93),
    ("ha", 0.93),
    ("as", 0.87),
    ("ou", 0.87),
    ("io", 0.83),
    ("le", 0.83),
    ("ve", 0.83),
    ("co", 0.79),
    ("me", 0.79),
    ("de", 0.76),
    ("hi", 0.76),
    ("ri", 0.73),
    ("ro", 0.73),
    ("ic", 0.70),
    ("ne", 0.69),
    ("ea", 0.69),
    ("ra", 0.69),
    ("ce", 0.65),
    ("li", 0.62),
    ("ch", 0.60),
    ("ll", 0.58),
    ("be", 0.58),
    ("ma", 0.57),
    ("si", 0.55),
    ("om", 0.55),
    ("ur", 0.54),
];

/// Word shapes, chosen uniformly
///
/// Most materialize to exactly 5 letters. `CVCVP` overshoots (its trailing
/// pair is cut to one letter) and `CVVC`/`PVC` undershoot (padded).
pub const TEMPLATES: [&[Token]; 10] = [
    &[C, V, C, V, C],
    &[C, V, C, C, V],
    &[P, V, C, V],
    &[C, V, P, V],
    &[C, V, C, P],
    &[P, V, P],
    &[V, C, C, V, C],
    &[C, V, C, V, P],
    &[C, V, V, C],
    &[P, V, C],
];

#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    VOWELS.iter().any(|&(v, _)| v == letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consonants_and_vowels_cover_alphabet() {
        let mut letters: Vec<u8> = CONSONANTS
            .iter()
            .chain(VOWELS.iter())
            .map(|&(l, _)| l)
            .collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn weights_positive() {
        assert!(CONSONANTS.iter().all(|&(_, w)| w > 0.0));
        assert!(VOWELS.iter().all(|&(_, w)| w > 0.0));
        assert!(PAIRS.iter().all(|&(_, w)| w > 0.0));
    }

    #[test]
    fn pairs_are_two_lowercase_letters() {
        for (pair, _) in PAIRS {
            assert_eq!(pair.len(), 2);
            assert!(pair.bytes().all(|b| b.is_ascii_lowercase()), "bad pair {pair}");
        }
    }

    #[test]
    fn vowel_check() {
        assert!(is_vowel(b'e'));
        assert!(!is_vowel(b'y'));
    }
}
