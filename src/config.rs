//! Engine configuration

use crate::matcher::EarlyExit;
use crate::selector::{GenerateAndValidate, StrategyKind};

/// Tunables for an [`Engine`](crate::session::Engine) and the games it runs
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Secret word selection strategy
    pub strategy: StrategyKind,
    /// Generate-and-validate attempts before falling back to edit distance
    pub max_generation_attempts: usize,
    /// Draws per secret word while looking for one not recently used
    pub unique_attempts: usize,
    /// Recently used words remembered before the oldest half is evicted
    pub cache_capacity: usize,
    /// Early exit for nearest-word fallback scans
    pub early_exit: EarlyExit,
    /// Guesses allowed per game
    pub max_guesses: usize,
    /// Reject guesses that are not lexicon words
    pub strict_guesses: bool,
    /// Seed for reproducible sessions; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub const DEFAULT_UNIQUE_ATTEMPTS: usize = 20;
    pub const DEFAULT_CACHE_CAPACITY: usize = 100;
    pub const DEFAULT_MAX_GUESSES: usize = 6;

    #[must_use]
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_strict_guesses(mut self, strict: bool) -> Self {
        self.strict_guesses = strict;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            max_generation_attempts: GenerateAndValidate::DEFAULT_ATTEMPTS,
            unique_attempts: Self::DEFAULT_UNIQUE_ATTEMPTS,
            cache_capacity: Self::DEFAULT_CACHE_CAPACITY,
            early_exit: EarlyExit::DISABLED,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
            strict_guesses: false,
            seed: None,
        }
    }
}
