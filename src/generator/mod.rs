//! Procedural candidate generation
//!
//! Produces pronounceable-looking 5-letter strings from weighted letter and
//! letter-pair statistics laid out by phonotactic templates. Candidates are
//! not guaranteed to be real words.

pub mod tables;
mod weighted;

pub use weighted::{weighted_index, weighted_pick};

use crate::core::WORD_LEN;
use rand::Rng;
use rand::seq::IndexedRandom;
use tables::{CONSONANTS, PAIRS, TEMPLATES, Token, VOWELS, is_vowel};
use tracing::trace;

/// Generator of candidate secret words
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateGenerator;

impl CandidateGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate one 5-letter candidate from a uniformly chosen template
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wrdly::generator::CandidateGenerator;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let candidate = CandidateGenerator::new().generate(&mut rng);
    /// assert_eq!(candidate.len(), 5);
    /// assert!(candidate.bytes().all(|b| b.is_ascii_lowercase()));
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let template: &[Token] = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
        let candidate = self.materialize(template, rng);
        trace!(?template, %candidate, "generated candidate");
        candidate
    }

    /// Fill a template left to right, then truncate or pad to exactly 5 letters
    ///
    /// Padding alternates consonant and vowel draws, starting with whichever
    /// class the last letter is not.
    pub fn materialize<R: Rng + ?Sized>(&self, template: &[Token], rng: &mut R) -> String {
        let mut letters: Vec<u8> = Vec::with_capacity(WORD_LEN + 1);

        for &token in template {
            if letters.len() >= WORD_LEN {
                break;
            }
            match token {
                Token::Consonant => letters.push(draw_consonant(rng)),
                Token::Vowel => letters.push(draw_vowel(rng)),
                Token::Pair => letters.extend_from_slice(draw_pair(rng).as_bytes()),
            }
        }

        // A trailing pair may overshoot by one letter
        letters.truncate(WORD_LEN);

        while letters.len() < WORD_LEN {
            let next_vowel = letters.last().is_some_and(|&l| !is_vowel(l));
            letters.push(if next_vowel {
                draw_vowel(rng)
            } else {
                draw_consonant(rng)
            });
        }

        letters.into_iter().map(char::from).collect()
    }
}

fn draw_consonant<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    weighted_pick(&CONSONANTS, rng).copied().unwrap_or(b't')
}

fn draw_vowel<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    weighted_pick(&VOWELS, rng).copied().unwrap_or(b'e')
}

fn draw_pair<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    weighted_pick(&PAIRS, rng).copied().unwrap_or("th")
}
