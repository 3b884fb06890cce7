//! Difficulty levels
//!
//! Difficulty only biases which lexicon words are likely to be drawn; it
//! never changes the lexicon or the scoring rules.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Favor words made of common letters
    #[default]
    Easy,
    /// No bias
    Medium,
    /// Favor words made of rare letters
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "0" => Ok(Self::Easy),
            "medium" | "m" | "1" => Ok(Self::Medium),
            "hard" | "h" | "2" => Ok(Self::Hard),
            other => Err(format!(
                "Invalid difficulty: {other} (expected easy, medium or hard)"
            )),
        }
    }
}
