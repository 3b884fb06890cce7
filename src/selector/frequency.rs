//! Letter-frequency scoring
//!
//! A word's score is the sum of the English frequencies (percent) of its
//! letters. Normalized scores drive difficulty-biased selection.

use crate::core::Word;
use rayon::prelude::*;

/// English letter frequencies in percent, `a` through `z`
pub const LETTER_FREQUENCY: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Frequency of a single lowercase letter; 0 for anything else
#[inline]
#[must_use]
pub fn letter_frequency(letter: u8) -> f64 {
    if letter.is_ascii_lowercase() {
        LETTER_FREQUENCY[usize::from(letter - b'a')]
    } else {
        0.0
    }
}

/// Sum of letter frequencies over the word, repeated letters counted each time
///
/// ```
/// use wrdly::core::Word;
/// use wrdly::selector::word_score;
///
/// let common = word_score(&Word::new("eaten").unwrap());
/// let rare = word_score(&Word::new("fuzzy").unwrap());
/// assert!(common > rare);
/// ```
#[must_use]
pub fn word_score(word: &Word) -> f64 {
    word.chars().iter().map(|&l| letter_frequency(l)).sum()
}

/// Min-max scaled scores in `[0, 1]`, in the same order as `words`
///
/// When every word scores the same there is nothing to rank, and all words
/// get 0.5.
#[must_use]
pub fn normalized_scores(words: &[Word]) -> Vec<f64> {
    let scores: Vec<f64> = words.par_iter().map(word_score).collect();

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if !range.is_finite() || range < 1e-9 {
        return vec![0.5; scores.len()];
    }

    scores.par_iter().map(|&s| (s - min) / range).collect()
}
