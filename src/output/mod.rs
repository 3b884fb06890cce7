//! Terminal output formatting
//!
//! Colored tiles, the keyboard view and printers for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_closest, print_evaluation, print_sample_report};
