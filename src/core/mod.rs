//! Core domain types for the game
//!
//! Words, per-letter feedback, the guess evaluator and difficulty levels.
//! Everything here is pure and deterministic.

mod difficulty;
mod evaluate;
mod status;
mod word;

pub use difficulty::Difficulty;
pub use evaluate::{evaluate, evaluate_str, update_status_map};
pub use status::{EvaluatedGuess, LetterStatus, LetterStatusMap, Tile, merge};
pub use word::{WORD_LEN, Word};
