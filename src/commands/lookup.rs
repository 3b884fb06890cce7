//! One-shot lookups: nearest lexicon word and guess evaluation

use crate::core::{EvaluatedGuess, evaluate_str};
use crate::error::Result;
use crate::session::Engine;
use rand::Rng;

/// Result of a nearest-word lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosestResult {
    pub candidate: String,
    pub word: String,
    pub distance: usize,
}

impl ClosestResult {
    /// The candidate is itself a lexicon word
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.distance == 0
    }
}

/// Find the lexicon word nearest to `candidate`
pub fn closest_word<R: Rng>(engine: &Engine<R>, candidate: &str) -> ClosestResult {
    let (word, distance) = engine.closest_word(candidate);
    ClosestResult {
        candidate: candidate.to_lowercase(),
        word: word.text().to_string(),
        distance,
    }
}

/// Score `guess` against `secret` without any session state
///
/// # Errors
///
/// Returns an error if either word is not five letters a-z.
pub fn evaluate_pair(guess: &str, secret: &str) -> Result<EvaluatedGuess> {
    evaluate_str(guess, secret)
}
