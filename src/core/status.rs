//! Per-letter feedback types
//!
//! `LetterStatus` is ordered `Absent < Present < Correct`. Keyboard aggregation
//! relies on that order: a letter's status can only move up.

use super::word::WORD_LEN;
use rustc_hash::FxHashMap;
use std::fmt;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter not in the secret (after accounting for already-matched duplicates)
    Absent,
    /// Letter in the secret, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl LetterStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Upgrade-only merge of two statuses for the same letter
///
/// Returns the higher-ranked status; an unseen letter takes `new` as is.
///
/// ```
/// use wrdly::core::{merge, LetterStatus};
///
/// assert_eq!(merge(Some(LetterStatus::Correct), LetterStatus::Absent), LetterStatus::Correct);
/// assert_eq!(merge(None, LetterStatus::Absent), LetterStatus::Absent);
/// ```
#[inline]
#[must_use]
pub fn merge(old: Option<LetterStatus>, new: LetterStatus) -> LetterStatus {
    old.map_or(new, |old| old.max(new))
}

/// A letter together with its evaluated status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub letter: u8,
    pub status: LetterStatus,
}

impl Tile {
    /// The letter as a `char`
    #[inline]
    #[must_use]
    pub const fn letter_char(self) -> char {
        self.letter as char
    }
}

/// The scored result of one guess, position-aligned with the guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluatedGuess {
    tiles: [Tile; WORD_LEN],
}

impl EvaluatedGuess {
    pub(crate) const fn from_tiles(tiles: [Tile; WORD_LEN]) -> Self {
        Self { tiles }
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.tiles
    }

    /// Statuses in guess order
    #[must_use]
    pub fn statuses(&self) -> [LetterStatus; WORD_LEN] {
        self.tiles.map(|tile| tile.status)
    }

    /// The guessed word, reassembled from the tiles
    #[must_use]
    pub fn guess(&self) -> String {
        self.tiles.iter().map(|tile| tile.letter_char()).collect()
    }

    /// Count tiles with the given status
    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.tiles.iter().filter(|tile| tile.status == status).count()
    }

    /// True when every tile is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.count(LetterStatus::Correct) == WORD_LEN
    }

    /// Emoji row like "🟩⬜⬜🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.tiles.iter().map(|tile| tile.status.emoji()).collect()
    }
}

impl fmt::Display for EvaluatedGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess(), self.to_emoji())
    }
}

/// Best status seen so far for each guessed letter
///
/// Only letters that appeared in at least one guess have an entry. Entries
/// never downgrade.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatusMap {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl LetterStatusMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status for a letter, or `None` if it has not been guessed
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterStatus> {
        self.statuses.get(&letter).copied()
    }

    /// Record one observation, keeping the higher-ranked status
    pub fn record(&mut self, letter: u8, status: LetterStatus) {
        let merged = merge(self.get(letter), status);
        self.statuses.insert(letter, merged);
    }

    /// Fold every tile of an evaluated guess into the map, in place
    pub fn apply(&mut self, evaluated: &EvaluatedGuess) {
        for tile in evaluated.tiles() {
            self.record(tile.letter, tile.status);
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn clear(&mut self) {
        self.statuses.clear();
    }

    /// Entries sorted by letter
    #[must_use]
    pub fn entries(&self) -> Vec<(u8, LetterStatus)> {
        let mut entries: Vec<_> = self.statuses.iter().map(|(&l, &s)| (l, s)).collect();
        entries.sort_unstable_by_key(|&(letter, _)| letter);
        entries
    }
}
