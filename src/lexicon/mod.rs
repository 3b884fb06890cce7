//! The lexicon of valid words
//!
//! A `Lexicon` is an immutable, non-empty, ordered set of words. Iteration
//! order is the insertion order, which keeps nearest-word tie-breaks and
//! seeded draws reproducible.

mod embedded;
pub mod loader;

pub use embedded::{LEXICON, LEXICON_COUNT};

use crate::core::{WORD_LEN, Word};
use crate::error::{EngineError, Result};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

/// Immutable set of valid words
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    index: FxHashMap<[u8; WORD_LEN], usize>,
}

impl Lexicon {
    /// Build a lexicon from words, dropping duplicates but keeping first-seen order
    ///
    /// # Errors
    /// Returns `EmptyLexicon` if no words are given.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut index = FxHashMap::default();
        let mut unique = Vec::new();

        for word in words {
            if let Entry::Vacant(slot) = index.entry(*word.chars()) {
                slot.insert(unique.len());
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }

        Ok(Self {
            words: unique,
            index,
        })
    }

    /// Build a lexicon from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `EmptyLexicon` if none of the entries is a valid word.
    ///
    /// # Examples
    /// ```
    /// use wrdly::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::from_strs(&["crane", "toolong", "slate"]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains_str("slate"));
    /// ```
    pub fn from_strs(slice: &[&str]) -> Result<Self> {
        Self::from_words(loader::words_from_slice(slice))
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is empty, which the build script rejects.
    pub fn embedded() -> Result<Self> {
        Self::from_strs(LEXICON)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.chars())
    }

    /// Membership test for raw text; invalid words are never members
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// The lexicon's own copy of `text`, if it is a member
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.index.get(word.chars()).map(|&i| &self.words[i])
    }

    /// Position of a word in lexicon order
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.index.get(word.chars()).copied()
    }

    /// All words in lexicon order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// The first word in lexicon order; always present
    #[inline]
    #[must_use]
    pub fn first(&self) -> &Word {
        &self.words[0]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed lexicon
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
