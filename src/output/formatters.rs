//! Formatting utilities for terminal output

use crate::core::{EvaluatedGuess, LetterStatus, LetterStatusMap, Tile};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A tile as a colored, uppercase block like " A "
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter_char().to_ascii_uppercase());
    match tile.status {
        LetterStatus::Correct => text.black().on_green().bold(),
        LetterStatus::Present => text.black().on_yellow().bold(),
        LetterStatus::Absent => text.white().on_bright_black(),
    }
}

/// All five tiles of a guess, colored
#[must_use]
pub fn colored_guess(evaluated: &EvaluatedGuess) -> String {
    evaluated
        .tiles()
        .iter()
        .map(|&tile| colored_tile(tile).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keyboard rows paired with each key's best known status
#[must_use]
pub fn keyboard_rows(statuses: &LetterStatusMap) -> Vec<Vec<(char, Option<LetterStatus>)>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            row.bytes()
                .map(|key| (char::from(key), statuses.get(key)))
                .collect()
        })
        .collect()
}

/// One colored line per keyboard row, indented like a physical keyboard
#[must_use]
pub fn colored_keyboard(statuses: &LetterStatusMap) -> Vec<String> {
    keyboard_rows(statuses)
        .into_iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .into_iter()
                .map(|(key, status)| {
                    let key = key.to_ascii_uppercase().to_string();
                    match status {
                        Some(LetterStatus::Correct) => key.green().bold().to_string(),
                        Some(LetterStatus::Present) => key.yellow().bold().to_string(),
                        Some(LetterStatus::Absent) => key.bright_black().to_string(),
                        None => key.white().to_string(),
                    }
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Clamped to [0, width] below
    let ratio = if max > 0.0 { (value / max).max(0.0) } else { 0.0 };
    let filled = ((ratio * width as f64) as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
