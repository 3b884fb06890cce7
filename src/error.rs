//! Error taxonomy for the game engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the engine
///
/// Per-guess errors (`InvalidWordLength`, `InvalidCharacter`, `NotInLexicon`,
/// `GameOver`) are recoverable: the caller re-prompts. `EmptyLexicon` and `Io`
/// only come out of lexicon construction.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("word must be exactly 5 letters, got {len}")]
    InvalidWordLength { len: usize },

    #[error("word contains invalid character '{ch}' (only a-z allowed)")]
    InvalidCharacter { ch: char },

    /// Internal to generate-and-validate selection; recovered before reaching callers
    #[error("no lexicon word generated after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    #[error("lexicon contains no valid words")]
    EmptyLexicon,

    #[error("'{word}' is not in the word list")]
    NotInLexicon { word: String },

    #[error("the game is already over")]
    GameOver,

    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
