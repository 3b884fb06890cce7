//! Recently issued secret words
//!
//! Keeps a session from handing out the same secret twice in a row. Bounded:
//! once it grows past its capacity the oldest half (at least one word) is
//! evicted.

use crate::config::EngineConfig;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SessionCache {
    order: VecDeque<Word>,
    seen: FxHashSet<Word>,
    capacity: usize,
    max_attempts: usize,
}

impl SessionCache {
    /// Create an empty cache
    ///
    /// `max_attempts` is clamped to at least 1 so every call draws once.
    #[must_use]
    pub fn new(capacity: usize, max_attempts: usize) -> Self {
        Self {
            order: VecDeque::new(),
            seen: FxHashSet::default(),
            capacity,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Draw words until one is not in the cache, then remember it
    ///
    /// Gives up after `max_attempts` draws and returns the last word drawn,
    /// even if it is a repeat. Never fails.
    pub fn next_unique<F>(&mut self, mut draw: F) -> Word
    where
        F: FnMut() -> Word,
    {
        let mut word = draw();
        let mut attempts = 1;

        while self.seen.contains(&word) && attempts < self.max_attempts {
            word = draw();
            attempts += 1;
        }

        if self.seen.contains(&word) {
            warn!(%word, attempts, "no unused word found, repeating");
        } else {
            self.insert(word.clone());
        }

        word
    }

    fn insert(&mut self, word: Word) {
        self.seen.insert(word.clone());
        self.order.push_back(word);

        if self.order.len() > self.capacity {
            let evict = (self.order.len() / 2).max(1);
            for old in self.order.drain(..evict) {
                self.seen.remove(&old);
            }
            debug!(evicted = evict, remaining = self.order.len(), "session cache trimmed");
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.seen.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Cached words, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.order.iter()
    }

    pub fn reset(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new(
            EngineConfig::DEFAULT_CACHE_CAPACITY,
            EngineConfig::DEFAULT_UNIQUE_ATTEMPTS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;

    fn cycling(words: &[&str]) -> impl FnMut() -> Word {
        let words = words_from_slice(words);
        let mut i = 0;
        move || {
            let word = words[i % words.len()].clone();
            i += 1;
            word
        }
    }

    #[test]
    fn returns_distinct_words_until_exhausted() {
        let mut cache = SessionCache::new(100, 20);
        let mut draw = cycling(&["crane", "slate", "irate", "crate"]);

        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(cache.next_unique(&mut draw));
        }

        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn skips_cached_words() {
        let mut cache = SessionCache::new(100, 20);
        let mut draw = cycling(&["crane", "crane", "crane", "slate"]);

        assert_eq!(cache.next_unique(&mut draw).text(), "crane");
        // Next three draws are crane, crane, slate: the repeats are skipped
        assert_eq!(cache.next_unique(&mut draw).text(), "slate");
    }

    #[test]
    fn tolerates_duplicates_when_attempts_run_out() {
        let mut cache = SessionCache::new(100, 5);
        let mut calls = 0;
        let mut draw = || {
            calls += 1;
            Word::new("crane").unwrap()
        };

        assert_eq!(cache.next_unique(&mut draw).text(), "crane");
        assert_eq!(cache.next_unique(&mut draw).text(), "crane");
        assert_eq!(calls, 1 + 5);
        assert_eq!(cache.len(), 1, "repeat is not inserted twice");
    }

    #[test]
    fn evicts_oldest_half_past_capacity() {
        let words: Vec<String> = (0..5u8)
            .map(|i| format!("{}aaaa", char::from(b'a' + i)))
            .collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();

        let mut cache = SessionCache::new(4, 20);
        let mut draw = cycling(&refs);
        for _ in 0..5 {
            cache.next_unique(&mut draw);
        }

        // 5 > 4: the two oldest are gone
        let remaining: Vec<&str> = cache.iter().map(Word::text).collect();
        assert_eq!(remaining, ["caaaa", "daaaa", "eaaaa"]);
        assert!(!cache.contains(&Word::new("aaaaa").unwrap()));
        assert!(cache.contains(&Word::new("eaaaa").unwrap()));
    }

    #[test]
    fn evicted_words_can_be_reissued() {
        let mut cache = SessionCache::new(1, 1);
        let mut draw = cycling(&["crane", "slate"]);

        cache.next_unique(&mut draw); // crane
        cache.next_unique(&mut draw); // slate, evicts crane
        assert!(!cache.contains(&Word::new("crane").unwrap()));
        assert_eq!(cache.next_unique(&mut draw).text(), "crane");
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut cache = SessionCache::new(0, 5);
        let mut draw = cycling(&["crane", "slate"]);

        cache.next_unique(&mut draw);
        assert!(cache.is_empty());
        cache.next_unique(&mut draw);
        assert!(cache.is_empty());
        assert!(!cache.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn reset_clears_everything() {
        let mut cache = SessionCache::default();
        let mut draw = cycling(&["crane", "slate"]);
        cache.next_unique(&mut draw);
        cache.next_unique(&mut draw);

        cache.reset();
        assert!(cache.is_empty());
        assert!(!cache.contains(&Word::new("crane").unwrap()));
    }

    #[test]
    fn zero_attempts_still_draws_once() {
        let mut cache = SessionCache::new(10, 0);
        let mut draw = cycling(&["crane"]);
        assert_eq!(cache.next_unique(&mut draw).text(), "crane");
    }
}
