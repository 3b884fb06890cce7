//! Nearest-word matching by edit distance
//!
//! Used to snap an invalid generated candidate onto the lexicon, and to
//! offer "closest word" hints.

mod distance;

pub use distance::distance;

use crate::core::Word;
use rand::Rng;

/// Policy for stopping the lexicon scan before it finishes
///
/// An exact match (distance 0) always stops the scan. Beyond that, a match at
/// distance `<= within` stops it with probability `probability`. The default
/// policy never stops early, which keeps the result fully deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyExit {
    pub within: usize,
    pub probability: f64,
}

impl EarlyExit {
    /// Never stop before an exact match
    pub const DISABLED: Self = Self {
        within: 0,
        probability: 0.0,
    };

    /// Accept any match within `within` edits with the given probability
    #[must_use]
    pub const fn new(within: usize, probability: f64) -> Self {
        Self {
            within,
            probability,
        }
    }

    /// Stop at distance 1 half of the time
    #[must_use]
    pub const fn coin_flip() -> Self {
        Self::new(1, 0.5)
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.within == 0 || self.probability.is_nan() || self.probability <= 0.0
    }

    fn accepts<R: Rng + ?Sized>(&self, dist: usize, rng: &mut R) -> bool {
        if self.is_disabled() || dist > self.within {
            return false;
        }
        self.probability >= 1.0 || rng.random_bool(self.probability)
    }
}

impl Default for EarlyExit {
    fn default() -> Self {
        Self::DISABLED
    }
}

/// Nearest word to `candidate` together with its distance
///
/// Scans `words` in order, keeping the first word seen at the minimum
/// distance. Returns `None` only when `words` is empty.
///
/// # Examples
/// ```
/// use wrdly::core::Word;
/// use wrdly::matcher::find_closest_exact;
///
/// let words: Vec<Word> = ["crane", "slate", "crate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let (word, dist) = find_closest_exact("crabe", &words).unwrap();
/// assert_eq!((word.text(), dist), ("crane", 1));
/// ```
#[must_use]
pub fn find_closest_exact<'a, I>(candidate: &str, words: I) -> Option<(&'a Word, usize)>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut best: Option<(&Word, usize)> = None;

    for word in words {
        let dist = distance(candidate, word.text());
        if dist == 0 {
            return Some((word, 0));
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((word, dist));
        }
    }

    best
}

/// Nearest word to `candidate`, optionally stopping early per `policy`
///
/// With [`EarlyExit::DISABLED`] this is exactly [`find_closest_exact`] and the
/// RNG is never touched.
pub fn find_closest<'a, I, R>(
    candidate: &str,
    words: I,
    policy: EarlyExit,
    rng: &mut R,
) -> Option<(&'a Word, usize)>
where
    I: IntoIterator<Item = &'a Word>,
    R: Rng + ?Sized,
{
    if policy.is_disabled() {
        return find_closest_exact(candidate, words);
    }

    let mut best: Option<(&Word, usize)> = None;

    for word in words {
        let dist = distance(candidate, word.text());
        if dist == 0 || policy.accepts(dist, rng) {
            return Some((word, dist));
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((word, dist));
        }
    }

    best
}
