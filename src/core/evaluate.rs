//! Guess scoring
//!
//! Implements Wordle feedback rules, including duplicate letters: a secret
//! letter can be matched by at most one guess letter, and exact matches claim
//! their secret positions before any displaced letter does.

use super::status::{EvaluatedGuess, LetterStatus, LetterStatusMap, Tile};
use super::word::{WORD_LEN, Word};
use crate::error::Result;

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and consume those
///    secret positions
/// 2. Second pass: for every other guess letter, claim the first unconsumed
///    secret position holding the same letter and mark it `Present`
/// 3. Everything left is `Absent`
///
/// # Examples
/// ```
/// use wrdly::core::{evaluate, LetterStatus::*, Word};
///
/// let guess = Word::new("angle").unwrap();
/// let secret = Word::new("apple").unwrap();
///
/// let result = evaluate(&guess, &secret);
/// assert_eq!(result.statuses(), [Correct, Absent, Absent, Correct, Correct]);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> EvaluatedGuess {
    let guess_chars = guess.chars();
    let secret_chars = secret.chars();

    let mut status = [LetterStatus::Absent; WORD_LEN];
    let mut consumed = [false; WORD_LEN];

    // First pass: exact position matches
    // Allow: index addresses guess, secret, status and consumed together
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LEN {
        if guess_chars[i] == secret_chars[i] {
            status[i] = LetterStatus::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: displaced letters, first available secret position wins
    for i in 0..WORD_LEN {
        if status[i] == LetterStatus::Correct {
            continue;
        }
        let letter = guess_chars[i];
        if let Some(j) = (0..WORD_LEN).find(|&j| !consumed[j] && secret_chars[j] == letter) {
            status[i] = LetterStatus::Present;
            consumed[j] = true;
        }
    }

    EvaluatedGuess::from_tiles(std::array::from_fn(|i| Tile {
        letter: guess_chars[i],
        status: status[i],
    }))
}

/// Validate two raw strings as words, then score them
///
/// # Errors
/// Returns `InvalidWordLength` or `InvalidCharacter` if either input is not a
/// valid word.
pub fn evaluate_str(guess: &str, secret: &str) -> Result<EvaluatedGuess> {
    let guess = Word::new(guess)?;
    let secret = Word::new(secret)?;
    Ok(evaluate(&guess, &secret))
}

/// Fold an evaluated guess into a status map, returning the updated copy
///
/// The input map is left untouched; use [`LetterStatusMap::apply`] to update
/// in place.
#[must_use]
pub fn update_status_map(map: &LetterStatusMap, evaluated: &EvaluatedGuess) -> LetterStatusMap {
    let mut updated = map.clone();
    updated.apply(evaluated);
    updated
}
