//! Wrdly - CLI
//!
//! Play the word guessing game in the terminal, or poke at the engine:
//! sample secret words, find the closest lexicon word, score a guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wrdly::{
    commands::{closest_word, evaluate_pair, run_play, run_sample},
    config::EngineConfig,
    core::Difficulty,
    lexicon::{Lexicon, loader::load_from_file},
    output::{print_closest, print_evaluation, print_sample_report},
    selector::StrategyKind,
    session::{Engine, Session},
};

#[derive(Parser)]
#[command(
    name = "wrdly",
    about = "Five-letter word guessing game with difficulty-aware word selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy (default), medium, hard
    #[arg(short, long, global = true, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Selection strategy: frequency (default) or generate
    #[arg(short, long, global = true, default_value_t = StrategyKind::Frequency)]
    strategy: StrategyKind,

    /// Seed for a reproducible session
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    lexicon: Option<PathBuf>,

    /// Recently used secrets remembered before eviction
    #[arg(long, global = true, default_value_t = EngineConfig::DEFAULT_CACHE_CAPACITY)]
    cache_capacity: usize,

    /// Only accept guesses that are in the word list
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play,

    /// Draw secret words and summarize them
    Sample {
        /// Number of words to draw
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Find the closest word in the word list
    Closest {
        /// Word to look up
        word: String,
    },

    /// Score a guess against a secret
    Evaluate {
        /// The guess
        guess: String,

        /// The secret word
        secret: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::default()
        .with_strategy(cli.strategy)
        .with_cache_capacity(cli.cache_capacity)
        .with_strict_guesses(cli.strict);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let engine = build_engine(cli.lexicon.as_deref(), config)?;
            let mut session = Session::new(engine, cli.difficulty);
            run_play(&mut session, io::stdin().lock(), &mut io::stdout())?;
        }
        Commands::Sample { count } => {
            let mut engine = build_engine(cli.lexicon.as_deref(), config)?;
            let report = run_sample(&mut engine, cli.difficulty, count, true);
            print_sample_report(&report);
        }
        Commands::Closest { word } => {
            let engine = build_engine(cli.lexicon.as_deref(), config)?;
            print_closest(&closest_word(&engine, &word));
        }
        Commands::Evaluate { guess, secret } => {
            let evaluated = evaluate_pair(&guess, &secret)?;
            print_evaluation(&evaluated);
        }
    }

    Ok(())
}

/// Build an engine over the word list at `path`, or the embedded one
fn build_engine(path: Option<&Path>, config: EngineConfig) -> Result<Engine> {
    let lexicon = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("loading word list from {}", path.display()))?,
        None => Lexicon::embedded().context("loading embedded word list")?,
    };
    Ok(Engine::new(lexicon, config))
}
