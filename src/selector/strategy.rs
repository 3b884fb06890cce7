//! Secret word selection strategies
//!
//! Defines the Strategy trait and the two concrete strategies. Exactly one is
//! active per engine; they are never blended.

use super::frequency::normalized_scores;
use crate::core::{Difficulty, Word};
use crate::error::EngineError;
use crate::generator::{CandidateGenerator, weighted_index};
use crate::lexicon::Lexicon;
use crate::matcher::{EarlyExit, find_closest};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// A strategy for drawing a secret word from the lexicon
pub trait Strategy {
    /// Draw one word for the given difficulty
    ///
    /// Always returns a member of `lexicon`.
    fn select<'a, R: Rng + ?Sized>(
        &self,
        lexicon: &'a Lexicon,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> &'a Word;
}

/// Which strategy an engine uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    /// Frequency-weighted direct selection (default)
    #[default]
    Frequency,
    /// Generate-and-validate with edit-distance fallback
    Generate,
}

impl StrategyKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frequency" | "freq" | "weighted" => Ok(Self::Frequency),
            "generate" | "gen" | "procedural" => Ok(Self::Generate),
            other => Err(format!(
                "Invalid strategy: {other} (expected frequency or generate)"
            )),
        }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Frequency(FrequencyWeighted),
    Generate(GenerateAndValidate),
}

impl StrategyType {
    /// Build the strategy named by `kind` for a given lexicon
    #[must_use]
    pub fn for_lexicon(
        kind: StrategyKind,
        lexicon: &Lexicon,
        max_generation_attempts: usize,
        early_exit: EarlyExit,
    ) -> Self {
        match kind {
            StrategyKind::Frequency => Self::Frequency(FrequencyWeighted::new(lexicon)),
            StrategyKind::Generate => Self::Generate(GenerateAndValidate::new(
                max_generation_attempts,
                early_exit,
            )),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Frequency(_) => StrategyKind::Frequency,
            Self::Generate(_) => StrategyKind::Generate,
        }
    }
}

impl Strategy for StrategyType {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        lexicon: &'a Lexicon,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> &'a Word {
        match self {
            Self::Frequency(s) => s.select(lexicon, difficulty, rng),
            Self::Generate(s) => s.select(lexicon, difficulty, rng),
        }
    }
}

/// Frequency-weighted direct selection
///
/// Every lexicon word is weighted by its normalized letter-frequency score:
/// - `Easy`: weight = score (common letters favored)
/// - `Medium`: weight = 1 (uniform)
/// - `Hard`: weight = 1 - score (rare letters favored)
///
/// Scores are computed once and only reused for the exact word list, in the
/// same order, they were built from.
#[derive(Debug, Clone)]
pub struct FrequencyWeighted {
    scored: Vec<Word>,
    normalized: Vec<f64>,
}

impl FrequencyWeighted {
    #[must_use]
    pub fn new(lexicon: &Lexicon) -> Self {
        Self {
            scored: lexicon.words().to_vec(),
            normalized: normalized_scores(lexicon.words()),
        }
    }

    /// True when the cached scores line up with `lexicon`
    #[must_use]
    pub fn is_built_for(&self, lexicon: &Lexicon) -> bool {
        self.scored.as_slice() == lexicon.words()
    }

    /// Selection weight of every lexicon word for a difficulty
    #[must_use]
    pub fn weights(&self, difficulty: Difficulty) -> Vec<f64> {
        match difficulty {
            Difficulty::Easy => self.normalized.clone(),
            Difficulty::Medium => vec![1.0; self.normalized.len()],
            Difficulty::Hard => self.normalized.iter().map(|s| 1.0 - s).collect(),
        }
    }
}

impl Strategy for FrequencyWeighted {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        lexicon: &'a Lexicon,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> &'a Word {
        let weights = if self.is_built_for(lexicon) {
            self.weights(difficulty)
        } else {
            // Built for a different lexicon; rescore rather than misalign
            Self::new(lexicon).weights(difficulty)
        };

        let words = lexicon.words();
        if let Some(i) = weighted_index(&weights, rng) {
            trace!(word = %words[i], weight = weights[i], %difficulty, "weighted draw");
            return &words[i];
        }

        // Every weight is zero, e.g. a one-word lexicon on easy
        words.choose(rng).unwrap_or_else(|| lexicon.first())
    }
}

/// Generate-and-validate selection
///
/// Generates procedural candidates until one is a lexicon word, up to
/// `max_attempts`. After that, one more candidate is snapped to its nearest
/// lexicon word by edit distance. Difficulty does not influence this
/// strategy.
#[derive(Debug, Clone)]
pub struct GenerateAndValidate {
    generator: CandidateGenerator,
    max_attempts: usize,
    early_exit: EarlyExit,
}

impl GenerateAndValidate {
    /// Default bound on generation attempts
    pub const DEFAULT_ATTEMPTS: usize = 100;

    #[must_use]
    pub const fn new(max_attempts: usize, early_exit: EarlyExit) -> Self {
        Self {
            generator: CandidateGenerator::new(),
            max_attempts,
            early_exit,
        }
    }

    /// Try to hit a lexicon word directly
    ///
    /// # Errors
    /// Returns `GenerationExhausted` when no candidate within the attempt
    /// bound is a lexicon word.
    pub fn try_generate<'a, R: Rng + ?Sized>(
        &self,
        lexicon: &'a Lexicon,
        rng: &mut R,
    ) -> Result<&'a Word, EngineError> {
        for attempt in 1..=self.max_attempts {
            let candidate = self.generator.generate(rng);
            if let Some(word) = lexicon.get(&candidate) {
                trace!(%word, attempt, "generated a lexicon word");
                return Ok(word);
            }
        }
        Err(EngineError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for GenerateAndValidate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATTEMPTS, EarlyExit::DISABLED)
    }
}

impl Strategy for GenerateAndValidate {
    fn select<'a, R: Rng + ?Sized>(
        &self,
        lexicon: &'a Lexicon,
        _difficulty: Difficulty,
        rng: &mut R,
    ) -> &'a Word {
        match self.try_generate(lexicon, rng) {
            Ok(word) => word,
            Err(err) => {
                let candidate = self.generator.generate(rng);
                let closest = find_closest(&candidate, lexicon, self.early_exit, rng);
                debug!(
                    error = %err,
                    %candidate,
                    closest = ?closest.map(|(w, d)| (w.text(), d)),
                    "falling back to nearest lexicon word"
                );
                closest.map_or_else(|| lexicon.first(), |(word, _)| word)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::frequency::word_score;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_lexicon() -> Lexicon {
        Lexicon::from_strs(&["fuzzy", "jazzy", "eaten", "tease", "crane", "slate"]).unwrap()
    }

    #[test]
    fn strategy_kind_parsing() {
        assert_eq!("frequency".parse(), Ok(StrategyKind::Frequency));
        assert_eq!("GENERATE".parse(), Ok(StrategyKind::Generate));
        assert!("entropy".parse::<StrategyKind>().is_err());
        assert_eq!(StrategyKind::default(), StrategyKind::Frequency);
    }

    #[test]
    fn for_lexicon_builds_requested_kind() {
        let lexicon = small_lexicon();
        for kind in [StrategyKind::Frequency, StrategyKind::Generate] {
            let strategy = StrategyType::for_lexicon(kind, &lexicon, 10, EarlyExit::DISABLED);
            assert_eq!(strategy.kind(), kind);
        }
    }

    #[test]
    fn frequency_selection_returns_lexicon_words() {
        let lexicon = small_lexicon();
        let strategy = FrequencyWeighted::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(1);

        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let word = strategy.select(&lexicon, difficulty, &mut rng);
                assert!(lexicon.contains(word));
            }
        }
    }

    #[test]
    fn weights_follow_difficulty() {
        let lexicon = small_lexicon();
        let strategy = FrequencyWeighted::new(&lexicon);

        let easy = strategy.weights(Difficulty::Easy);
        let medium = strategy.weights(Difficulty::Medium);
        let hard = strategy.weights(Difficulty::Hard);

        assert!(medium.iter().all(|&w| (w - 1.0).abs() < f64::EPSILON));
        for (e, h) in easy.iter().zip(&hard) {
            assert!((e + h - 1.0).abs() < 1e-12);
        }
        // fuzzy is the rarest-letter word: never drawn on easy, heaviest on hard
        assert!(easy[0].abs() < 1e-12);
        assert!((hard[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn easy_draws_more_common_letters_than_hard() {
        let lexicon = Lexicon::embedded().unwrap();
        let strategy = FrequencyWeighted::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(99);

        let mean = |difficulty, rng: &mut StdRng| {
            (0..500)
                .map(|_| word_score(strategy.select(&lexicon, difficulty, rng)))
                .sum::<f64>()
                / 500.0
        };

        let easy = mean(Difficulty::Easy, &mut rng);
        let hard = mean(Difficulty::Hard, &mut rng);
        assert!(easy > hard, "easy {easy:.2} should beat hard {hard:.2}");
    }

    #[test]
    fn single_word_lexicon_on_easy() {
        let lexicon = Lexicon::from_strs(&["crane"]).unwrap();
        let strategy = FrequencyWeighted::new(&lexicon);
        let mut rng = StdRng::seed_from_u64(4);

        for difficulty in Difficulty::ALL {
            assert_eq!(strategy.select(&lexicon, difficulty, &mut rng).text(), "crane");
        }
    }

    #[test]
    fn frequency_strategy_tolerates_other_lexicon() {
        let built_for = small_lexicon();
        let other = Lexicon::from_strs(&["apple", "grape"]).unwrap();
        let strategy = FrequencyWeighted::new(&built_for);
        let mut rng = StdRng::seed_from_u64(8);

        let word = strategy.select(&other, Difficulty::Medium, &mut rng);
        assert!(other.contains(word));
    }

    #[test]
    fn reordered_lexicon_is_rescored() {
        let built_for = Lexicon::from_strs(&["fuzzy", "eaten"]).unwrap();
        let reordered = Lexicon::from_strs(&["eaten", "fuzzy"]).unwrap();
        let strategy = FrequencyWeighted::new(&built_for);
        let mut rng = StdRng::seed_from_u64(12);

        assert!(strategy.is_built_for(&built_for));
        assert!(!strategy.is_built_for(&reordered));

        // fuzzy has the lowest score, so easy never picks it in either order
        for _ in 0..200 {
            let word = strategy.select(&reordered, Difficulty::Easy, &mut rng);
            assert_eq!(word.text(), "eaten");
        }
    }

    #[test]
    fn generate_falls_back_to_closest_word() {
        // Generated candidates essentially never hit this lexicon
        let lexicon = Lexicon::from_strs(&["qajaq", "xylyl"]).unwrap();
        let strategy = GenerateAndValidate::new(3, EarlyExit::DISABLED);
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..50 {
            let word = strategy.select(&lexicon, Difficulty::Hard, &mut rng);
            assert!(lexicon.contains(word));
        }
    }

    #[test]
    fn generate_with_zero_attempts_still_returns_a_word() {
        let lexicon = small_lexicon();
        let strategy = GenerateAndValidate::new(0, EarlyExit::coin_flip());
        let mut rng = StdRng::seed_from_u64(23);

        assert!(matches!(
            strategy.try_generate(&lexicon, &mut rng),
            Err(EngineError::GenerationExhausted { attempts: 0 })
        ));
        let word = strategy.select(&lexicon, Difficulty::Easy, &mut rng);
        assert!(lexicon.contains(word));
    }

    #[test]
    fn generate_finds_common_words_in_full_lexicon() {
        let lexicon = Lexicon::embedded().unwrap();
        let strategy = GenerateAndValidate::default();
        let mut rng = StdRng::seed_from_u64(31);

        for _ in 0..20 {
            let word = strategy.select(&lexicon, Difficulty::Medium, &mut rng);
            assert!(lexicon.contains(word));
        }
    }
}
