//! Display functions for command results

use super::formatters::{colored_guess, colored_keyboard, create_progress_bar};
use crate::commands::{ClosestResult, SampleReport};
use crate::core::{EvaluatedGuess, LetterStatusMap};
use crate::selector::LETTER_FREQUENCY;
use colored::Colorize;

/// Print the result of a sampling run
pub fn print_sample_report(report: &SampleReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} / {} ",
        "SAMPLE:".bright_cyan().bold(),
        report.difficulty.to_string().bright_yellow().bold(),
        report.strategy
    );
    println!("{}", "═".repeat(60).cyan());

    // A word of five 'e's is the ceiling for the score bar
    let ceiling = LETTER_FREQUENCY.iter().copied().fold(0.0, f64::max) * 5.0;

    println!("\n📊 {}", "Draws:".bright_cyan().bold());
    println!("   Words drawn:      {}", report.draws);
    println!(
        "   Distinct:         {}",
        report.distinct.to_string().bright_yellow().bold()
    );
    println!(
        "   Mean score:       [{}] {}",
        create_progress_bar(report.mean_score, ceiling, 30).green(),
        format!("{:.2}", report.mean_score).bright_yellow()
    );
    println!(
        "   Score range:      {:.2} .. {:.2}",
        report.min_score, report.max_score
    );
    println!("   Time taken:       {:.3}s", report.duration.as_secs_f64());

    if !report.top_words.is_empty() {
        println!("\n📈 {}", "Most drawn:".bright_cyan().bold());
        for (word, count) in &report.top_words {
            println!("   {} {count:4}", word.to_uppercase().bright_white());
        }
    }
    println!();
}

/// Print the nearest lexicon word to a candidate
pub fn print_closest(result: &ClosestResult) {
    if result.is_exact() {
        println!(
            "✅ {} is in the word list",
            result.candidate.to_uppercase().green().bold()
        );
    } else {
        println!(
            "💡 {} → {} (edit distance {})",
            result.candidate.to_uppercase(),
            result.word.to_uppercase().bright_cyan().bold(),
            result.distance.to_string().bright_yellow()
        );
    }
}

/// Print an evaluated guess with its tiles and keyboard
pub fn print_evaluation(evaluated: &EvaluatedGuess) {
    let mut statuses = LetterStatusMap::new();
    statuses.apply(evaluated);

    println!("\n  {}   {}", colored_guess(evaluated), evaluated.to_emoji());
    println!();
    for row in colored_keyboard(&statuses) {
        println!("  {row}");
    }
    println!();
}
