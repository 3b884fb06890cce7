//! Wrdly
//!
//! The engine behind a five-letter word guessing game: guess evaluation with
//! duplicate-aware scoring, keyboard letter-status aggregation, difficulty-biased
//! secret word selection, a procedural candidate generator and a session cache
//! that keeps secrets from repeating.
//!
//! # Quick Start
//!
//! ```rust
//! use wrdly::config::EngineConfig;
//! use wrdly::core::{Difficulty, LetterStatusMap};
//! use wrdly::session::Engine;
//!
//! let mut engine = Engine::embedded(EngineConfig::default().with_seed(7))?;
//! let secret = engine.new_secret_word(Difficulty::Easy);
//!
//! let statuses = LetterStatusMap::new();
//! let (evaluated, statuses) = engine.submit_guess("crane", &secret, &statuses)?;
//! println!("{evaluated}");
//! assert!(!statuses.is_empty());
//!
//! assert_eq!(Engine::distance("crane", "crate"), 1);
//! # Ok::<(), wrdly::error::EngineError>(())
//! ```

// Core domain types
pub mod core;

// Engine configuration and errors
pub mod config;
pub mod error;

// Word list
pub mod lexicon;

// Edit distance and nearest-word search
pub mod matcher;

// Procedural candidate generation
pub mod generator;

// Secret word selection strategies
pub mod selector;

// Session cache, engine facade and game rounds
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
