//! Sample command
//!
//! Draws many secret words through the session cache and summarizes them,
//! which makes the difficulty bias of a strategy visible.

use crate::core::Difficulty;
use crate::selector::{StrategyKind, word_score};
use crate::session::Engine;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Summary of a sampling run
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub difficulty: Difficulty,
    pub strategy: StrategyKind,
    pub draws: usize,
    pub distinct: usize,
    pub mean_score: f64,
    pub min_score: f64,
    pub max_score: f64,
    /// Most frequently drawn words, highest count first
    pub top_words: Vec<(String, usize)>,
    pub duration: Duration,
}

/// Draw `count` secret words at `difficulty`
///
/// Set `show_progress` to render a progress bar on stderr.
pub fn run_sample<R: Rng>(
    engine: &mut Engine<R>,
    difficulty: Difficulty,
    count: usize,
    show_progress: bool,
) -> SampleReport {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut total = 0.0;
    let mut min_score = f64::INFINITY;
    let mut max_score = f64::NEG_INFINITY;

    for _ in 0..count {
        let word = engine.new_secret_word(difficulty);
        let score = word_score(&word);

        total += score;
        min_score = min_score.min(score);
        max_score = max_score.max(score);
        pb.set_message(word.text().to_string());
        *counts.entry(word.text().to_string()).or_insert(0) += 1;
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mut top_words: Vec<(String, usize)> = counts.iter().map(|(w, &c)| (w.clone(), c)).collect();
    top_words.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_words.truncate(5);

    let (mean_score, min_score, max_score) = if count == 0 {
        (0.0, 0.0, 0.0)
    } else {
        (total / count as f64, min_score, max_score)
    };

    SampleReport {
        difficulty,
        strategy: engine.strategy_kind(),
        draws: count,
        distinct: counts.len(),
        mean_score,
        min_score,
        max_score,
        top_words,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn engine(seed: u64) -> Engine {
        Engine::embedded(EngineConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn counts_draws_and_distinct_words() {
        let report = run_sample(&mut engine(1), Difficulty::Medium, 40, false);
        assert_eq!(report.draws, 40);
        assert!(report.distinct <= 40);
        assert!(report.distinct > 30, "cache keeps repeats rare");
        assert!(report.min_score <= report.mean_score);
        assert!(report.mean_score <= report.max_score);
        assert!(report.top_words.len() <= 5);
    }

    #[test]
    fn easy_words_score_higher_than_hard() {
        let easy = run_sample(&mut engine(2), Difficulty::Easy, 300, false);
        let hard = run_sample(&mut engine(2), Difficulty::Hard, 300, false);
        assert!(
            easy.mean_score > hard.mean_score,
            "easy {} vs hard {}",
            easy.mean_score,
            hard.mean_score
        );
    }

    #[test]
    fn empty_run() {
        let report = run_sample(&mut engine(3), Difficulty::Hard, 0, false);
        assert_eq!(report.distinct, 0);
        assert!(report.mean_score.abs() < f64::EPSILON);
    }
}
