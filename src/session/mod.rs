//! Play session state
//!
//! The [`Engine`] owns everything that outlives a round: the lexicon, the
//! selection strategy, the cache of recent secrets and the RNG. A [`Game`]
//! is one round; a [`Session`] strings rounds together and keeps score.

pub mod cache;
pub mod engine;
pub mod game;

pub use cache::SessionCache;
pub use engine::Engine;
pub use game::{Game, Outcome, Session};
