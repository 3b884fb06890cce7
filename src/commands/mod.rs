//! Command implementations

pub mod lookup;
pub mod play;
pub mod sample;

pub use lookup::{ClosestResult, closest_word, evaluate_pair};
pub use play::{PlaySummary, run_play};
pub use sample::{SampleReport, run_sample};
