//! Game rounds and the play session around them

use super::engine::Engine;
use crate::config::EngineConfig;
use crate::core::{Difficulty, EvaluatedGuess, LetterStatusMap, Word};
use crate::error::{EngineError, Result};
use rand::Rng;
use rand::rngs::StdRng;
use std::fmt;
use tracing::debug;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// One round: a secret, the guesses made so far and the keyboard state
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    guesses: Vec<EvaluatedGuess>,
    statuses: LetterStatusMap,
    max_guesses: usize,
    outcome: Outcome,
}

impl Game {
    /// Start a round; `max_guesses` is clamped to at least 1
    #[must_use]
    pub fn new(secret: Word, max_guesses: usize) -> Self {
        let max_guesses = max_guesses.max(1);
        Self {
            secret,
            guesses: Vec::with_capacity(max_guesses),
            statuses: LetterStatusMap::new(),
            max_guesses,
            outcome: Outcome::Playing,
        }
    }

    /// Score `input` against the secret and advance the round
    ///
    /// A rejected guess leaves the round untouched and does not use a turn.
    ///
    /// # Errors
    /// - `GameOver` once the round is won or lost
    /// - any error from [`Engine::submit_guess`]
    pub fn guess<R: Rng>(&mut self, engine: &Engine<R>, input: &str) -> Result<EvaluatedGuess> {
        if self.outcome.is_over() {
            return Err(EngineError::GameOver);
        }

        let (evaluated, statuses) = engine.submit_guess(input, &self.secret, &self.statuses)?;
        self.statuses = statuses;
        self.guesses.push(evaluated.clone());

        if evaluated.is_solved() {
            self.outcome = Outcome::Won;
        } else if self.guesses.len() >= self.max_guesses {
            self.outcome = Outcome::Lost;
        }

        debug!(
            guess = %evaluated.guess(),
            turn = self.guesses.len(),
            outcome = %self.outcome,
            "guess scored"
        );

        Ok(evaluated)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &[EvaluatedGuess] {
        &self.guesses
    }

    #[must_use]
    pub const fn statuses(&self) -> &LetterStatusMap {
        &self.statuses
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }
}

/// An engine plus the round being played and a running score
#[derive(Debug)]
pub struct Session<R = StdRng> {
    engine: Engine<R>,
    difficulty: Difficulty,
    game: Game,
    score: usize,
    games_played: usize,
}

impl Session<StdRng> {
    /// Open a session over the embedded word list
    ///
    /// # Errors
    /// Returns `EmptyLexicon` if the embedded list holds no valid words.
    pub fn embedded(config: EngineConfig, difficulty: Difficulty) -> Result<Self> {
        Ok(Self::new(Engine::embedded(config)?, difficulty))
    }
}

impl<R: Rng> Session<R> {
    /// Open a session and deal the first round
    pub fn new(mut engine: Engine<R>, difficulty: Difficulty) -> Self {
        let game = Self::deal(&mut engine, difficulty);
        Self {
            engine,
            difficulty,
            game,
            score: 0,
            games_played: 0,
        }
    }

    fn deal(engine: &mut Engine<R>, difficulty: Difficulty) -> Game {
        let secret = engine.new_secret_word(difficulty);
        Game::new(secret, engine.config().max_guesses)
    }

    /// Abandon the current round and deal a fresh one
    pub fn new_game(&mut self) -> &Game {
        self.game = Self::deal(&mut self.engine, self.difficulty);
        &self.game
    }

    /// Guess in the current round, crediting the score on a win
    ///
    /// # Errors
    /// Same as [`Game::guess`].
    pub fn guess(&mut self, input: &str) -> Result<EvaluatedGuess> {
        let evaluated = self.game.guess(&self.engine, input)?;

        match self.game.outcome() {
            Outcome::Won => {
                self.score += 1;
                self.games_played += 1;
            }
            Outcome::Lost => self.games_played += 1,
            Outcome::Playing => {}
        }

        Ok(evaluated)
    }

    /// Start over: forget recent secrets, zero the score, deal a new round
    pub fn reset(&mut self) -> &Game {
        self.engine.reset_session(&mut self.game.statuses);
        self.score = 0;
        self.games_played = 0;
        self.game = Self::deal(&mut self.engine, self.difficulty);
        &self.game
    }

    /// Change difficulty; takes effect from the next round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Nearest lexicon word to `input`, for "did you mean" prompts
    #[must_use]
    pub fn hint(&self, input: &str) -> (&Word, usize) {
        self.engine.closest_word(input)
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn games_played(&self) -> usize {
        self.games_played
    }
}
