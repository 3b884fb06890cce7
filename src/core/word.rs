//! Word representation
//!
//! A Word is a validated 5-letter lowercase ASCII word.

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A validated 5-letter word
///
/// Stores the word both as text (for display and lookups by `&str`) and as a
/// byte array (for position-wise comparison).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased first, then validated.
    ///
    /// # Errors
    /// - `InvalidWordLength` if the input is not exactly 5 characters
    /// - `InvalidCharacter` if any character is outside `a`-`z`
    ///
    /// # Examples
    /// ```
    /// use wrdly::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self> {
        let text = text.as_ref().to_lowercase();

        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(EngineError::InvalidWordLength { len });
        }

        if let Some(ch) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(EngineError::InvalidCharacter { ch });
        }

        // All characters are ASCII, so 5 chars is exactly 5 bytes
        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
