//! Secret word selection
//!
//! Strategies that draw a secret word from the lexicon under a difficulty,
//! and the letter-frequency scoring they rely on.

pub mod frequency;
pub mod strategy;

pub use frequency::{LETTER_FREQUENCY, letter_frequency, normalized_scores, word_score};
pub use strategy::{FrequencyWeighted, GenerateAndValidate, Strategy, StrategyKind, StrategyType};
