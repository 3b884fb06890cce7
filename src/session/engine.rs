//! The engine facade
//!
//! Owns the lexicon, the selection strategy, the session cache and the RNG,
//! and exposes the operations a front end needs: draw a secret, score a
//! guess, reset the session, measure edit distance.

use super::cache::SessionCache;
use crate::config::EngineConfig;
use crate::core::{Difficulty, EvaluatedGuess, LetterStatusMap, Word, evaluate, update_status_map};
use crate::error::{EngineError, Result};
use crate::lexicon::Lexicon;
use crate::matcher::{distance, find_closest_exact};
use crate::selector::{Strategy, StrategyKind, StrategyType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Word selection and guess scoring for one play session
///
/// Mutating operations take `&mut self`; share an engine across threads by
/// wrapping it in a single lock.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    lexicon: Lexicon,
    strategy: StrategyType,
    cache: SessionCache,
    config: EngineConfig,
    rng: R,
}

impl Engine<StdRng> {
    /// Create an engine seeded from `config.seed`, or from the OS when unset
    #[must_use]
    pub fn new(lexicon: Lexicon, config: EngineConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(lexicon, config, rng)
    }

    /// Create an engine over the embedded word list
    ///
    /// # Errors
    /// Returns `EmptyLexicon` if the embedded list holds no valid words.
    pub fn embedded(config: EngineConfig) -> Result<Self> {
        Ok(Self::new(Lexicon::embedded()?, config))
    }

    /// Levenshtein distance between two strings
    #[must_use]
    pub fn distance(a: &str, b: &str) -> usize {
        distance(a, b)
    }
}

impl<R: Rng> Engine<R> {
    /// Create an engine with an explicit random source
    pub fn with_rng(lexicon: Lexicon, config: EngineConfig, rng: R) -> Self {
        let strategy = StrategyType::for_lexicon(
            config.strategy,
            &lexicon,
            config.max_generation_attempts,
            config.early_exit,
        );
        let cache = SessionCache::new(config.cache_capacity, config.unique_attempts);

        debug!(
            words = lexicon.len(),
            strategy = %config.strategy,
            cache_capacity = config.cache_capacity,
            "engine ready"
        );

        Self {
            lexicon,
            strategy,
            cache,
            config,
            rng,
        }
    }

    /// Draw a secret word for a new game, avoiding recently used words
    ///
    /// Always returns a lexicon word. Repeats are possible only when the
    /// cache cannot find an unused word within its attempt bound.
    pub fn new_secret_word(&mut self, difficulty: Difficulty) -> Word {
        let lexicon = &self.lexicon;
        let strategy = &self.strategy;
        let rng = &mut self.rng;
        self.cache
            .next_unique(|| strategy.select(lexicon, difficulty, rng).clone())
    }

    /// Draw one word with the active strategy, bypassing the session cache
    pub fn select_word(&mut self, difficulty: Difficulty) -> &Word {
        self.strategy.select(&self.lexicon, difficulty, &mut self.rng)
    }

    /// Score a raw guess against the secret
    ///
    /// Returns the evaluated guess and the status map with it folded in;
    /// `statuses` itself is left unchanged.
    ///
    /// # Errors
    /// - `InvalidWordLength` / `InvalidCharacter` for malformed guesses
    /// - `NotInLexicon` when strict guessing is on and the guess is unknown
    pub fn submit_guess(
        &self,
        guess: &str,
        secret: &Word,
        statuses: &LetterStatusMap,
    ) -> Result<(EvaluatedGuess, LetterStatusMap)> {
        let guess = Word::new(guess)?;

        if self.config.strict_guesses && !self.lexicon.contains(&guess) {
            return Err(EngineError::NotInLexicon {
                word: guess.text().to_string(),
            });
        }

        let evaluated = evaluate(&guess, secret);
        let updated = update_status_map(statuses, &evaluated);
        Ok((evaluated, updated))
    }

    /// Forget recently used secrets and clear the caller's status map
    pub fn reset_session(&mut self, statuses: &mut LetterStatusMap) {
        self.cache.reset();
        statuses.clear();
        debug!("session reset");
    }

    /// Nearest lexicon word to `candidate` and its distance
    ///
    /// Deterministic: ties go to the earlier lexicon word.
    #[must_use]
    pub fn closest_word(&self, candidate: &str) -> (&Word, usize) {
        let candidate = candidate.to_lowercase();
        find_closest_exact(&candidate, &self.lexicon).unwrap_or_else(|| {
            let first = self.lexicon.first();
            (first, distance(&candidate, first.text()))
        })
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &SessionCache {
        &self.cache
    }

    #[must_use]
    pub const fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct};

    fn engine(words: &[&str], seed: u64) -> Engine {
        let lexicon = Lexicon::from_strs(words).unwrap();
        Engine::new(lexicon, EngineConfig::default().with_seed(seed))
    }

    #[test]
    fn secret_words_come_from_lexicon() {
        let mut engine = Engine::embedded(EngineConfig::default().with_seed(3)).unwrap();
        for difficulty in Difficulty::ALL {
            for _ in 0..50 {
                let word = engine.new_secret_word(difficulty);
                assert!(engine.lexicon().contains(&word));
            }
        }
    }

    #[test]
    fn secret_words_do_not_repeat_within_small_session() {
        let mut engine = engine(&["crane", "slate", "irate", "crate", "grate"], 11);
        let mut drawn: Vec<Word> = (0..3)
            .map(|_| engine.new_secret_word(Difficulty::Medium))
            .collect();
        drawn.sort();
        drawn.dedup();
        assert_eq!(drawn.len(), 3);
        assert_eq!(engine.cache().len(), 3);
    }

    #[test]
    fn same_seed_same_secrets() {
        let draw = |seed| {
            let mut engine = Engine::embedded(EngineConfig::default().with_seed(seed)).unwrap();
            (0..5)
                .map(|_| engine.new_secret_word(Difficulty::Hard))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }

    #[test]
    fn submit_guess_scores_and_merges() {
        let engine = engine(&["apple", "angle"], 1);
        let secret = Word::new("apple").unwrap();
        let statuses = LetterStatusMap::new();

        let (evaluated, updated) = engine.submit_guess("angle", &secret, &statuses).unwrap();
        assert_eq!(
            evaluated.statuses(),
            [Correct, Absent, Absent, Correct, Correct]
        );
        assert_eq!(updated.get(b'n'), Some(Absent));
        assert!(statuses.is_empty());
    }

    #[test]
    fn submit_guess_rejects_malformed_input() {
        let engine = engine(&["apple"], 1);
        let secret = Word::new("apple").unwrap();
        let statuses = LetterStatusMap::new();

        assert!(matches!(
            engine.submit_guess("appl", &secret, &statuses),
            Err(EngineError::InvalidWordLength { len: 4 })
        ));
        assert!(matches!(
            engine.submit_guess("app!e", &secret, &statuses),
            Err(EngineError::InvalidCharacter { ch: '!' })
        ));
    }

    #[test]
    fn strict_guesses_must_be_lexicon_words() {
        let lexicon = Lexicon::from_strs(&["apple", "angle"]).unwrap();
        let engine = Engine::new(
            lexicon,
            EngineConfig::default().with_seed(1).with_strict_guesses(true),
        );
        let secret = Word::new("apple").unwrap();
        let statuses = LetterStatusMap::new();

        assert!(matches!(
            engine.submit_guess("zzzzz", &secret, &statuses),
            Err(EngineError::NotInLexicon { .. })
        ));
        assert!(engine.submit_guess("angle", &secret, &statuses).is_ok());
    }

    #[test]
    fn reset_session_clears_cache_and_statuses() {
        let mut engine = engine(&["crane", "slate"], 5);
        let mut statuses = LetterStatusMap::new();
        statuses.record(b'c', Correct);
        engine.new_secret_word(Difficulty::Easy);

        engine.reset_session(&mut statuses);
        assert!(engine.cache().is_empty());
        assert!(statuses.is_empty());
    }

    #[test]
    fn distance_exposed() {
        assert_eq!(Engine::distance("apple", "apply"), 1);
        assert_eq!(Engine::distance("", "crane"), 5);
    }

    #[test]
    fn closest_word_hint() {
        let engine = engine(&["crane", "slate", "crate"], 1);
        let (word, dist) = engine.closest_word("SLATS");
        assert_eq!((word.text(), dist), ("slate", 1));
    }

    #[test]
    fn generate_strategy_engine() {
        let lexicon = Lexicon::embedded().unwrap();
        let config = EngineConfig::default()
            .with_seed(9)
            .with_strategy(StrategyKind::Generate);
        let mut engine = Engine::new(lexicon, config);

        assert_eq!(engine.strategy_kind(), StrategyKind::Generate);
        for _ in 0..10 {
            let word = engine.new_secret_word(Difficulty::Medium);
            assert!(engine.lexicon().contains(&word));
        }
    }
}
