//! Play command
//!
//! Line-oriented game loop over a [`Session`]. Reads guesses and commands
//! from any `BufRead` and writes to any `Write` so it can be scripted.

use crate::core::Difficulty;
use crate::error::EngineError;
use crate::output::formatters::{colored_guess, colored_keyboard};
use crate::session::{Outcome, Session};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Totals at the end of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub games_played: usize,
    pub score: usize,
}

enum Command<'a> {
    Quit,
    New,
    Help,
    Hint(Option<&'a str>),
    Difficulty(&'a str),
    Guess(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default();
    let rest = parts.next().map(str::trim).filter(|s| !s.is_empty());

    match (head, rest) {
        ("quit" | "q" | "exit", None) => Command::Quit,
        ("new" | "n", None) => Command::New,
        ("help" | "?", None) => Command::Help,
        ("hint", arg) => Command::Hint(arg),
        ("difficulty" | "d", Some(level)) => Command::Difficulty(level),
        _ => Command::Guess(line),
    }
}

/// Run the interactive game loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R, I, W>(session: &mut Session<R>, input: I, out: &mut W) -> io::Result<PlaySummary>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    print_intro(session, out)?;
    let mut lines = input.lines();

    loop {
        let game = session.game();
        write!(
            out,
            "Guess {}/{}: ",
            game.guesses().len() + 1,
            game.max_guesses()
        )?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?.trim().to_lowercase();
        if line.is_empty() {
            continue;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::New => {
                session.new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Command::Help => print_help(out)?,
            Command::Hint(word) => {
                let target = word
                    .map(str::to_string)
                    .or_else(|| session.game().guesses().last().map(|g| g.guess()));
                match target {
                    Some(target) => {
                        let (nearest, distance) = session.hint(&target);
                        writeln!(
                            out,
                            "💡 Closest word to {}: {} (distance {distance})",
                            target.to_uppercase(),
                            nearest.text().to_uppercase().bright_cyan().bold()
                        )?;
                    }
                    None => writeln!(out, "Make a guess first, or use 'hint WORD'")?,
                }
            }
            Command::Difficulty(level) => match level.parse::<Difficulty>() {
                Ok(difficulty) => {
                    session.set_difficulty(difficulty);
                    writeln!(out, "Difficulty set to {difficulty} (applies from the next game)")?;
                }
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            Command::Guess(guess) => play_guess(session, guess, out)?,
        }
    }

    let summary = PlaySummary {
        games_played: session.games_played(),
        score: session.score(),
    };
    writeln!(
        out,
        "\n👋 Thanks for playing! Won {} of {} games.\n",
        summary.score, summary.games_played
    )?;
    Ok(summary)
}

fn play_guess<R: Rng, W: Write>(session: &mut Session<R>, guess: &str, out: &mut W) -> io::Result<()> {
    match session.guess(guess) {
        Ok(_) => {}
        Err(EngineError::NotInLexicon { word }) => {
            let (nearest, _) = session.hint(&word);
            writeln!(
                out,
                "❌ {} is not in the word list. Did you mean {}?",
                word.to_uppercase(),
                nearest.text().to_uppercase()
            )?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "❌ {e}")?;
            return Ok(());
        }
    }

    let game = session.game();
    writeln!(out)?;
    for evaluated in game.guesses() {
        writeln!(out, "  {}", colored_guess(evaluated))?;
    }
    writeln!(out)?;
    for row in colored_keyboard(game.statuses()) {
        writeln!(out, "  {row}")?;
    }
    writeln!(out)?;

    match game.outcome() {
        Outcome::Playing => return Ok(()),
        Outcome::Won => {
            let turns = game.guesses().len();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
        }
        Outcome::Lost => {
            writeln!(
                out,
                "{} The word was {}.",
                "❌ Out of guesses.".red().bold(),
                game.secret().text().to_uppercase().bright_yellow().bold()
            )?;
        }
    }

    for evaluated in game.guesses() {
        writeln!(out, "  {}", evaluated.to_emoji())?;
    }
    writeln!(
        out,
        "\nScore: {}/{}\n",
        session.score(),
        session.games_played()
    )?;

    session.new_game();
    writeln!(out, "🔄 New game started!\n")
}

fn print_intro<R: Rng, W: Write>(session: &Session<R>, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                       W R D L Y                              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the five-letter word in {} tries. Difficulty: {}, strategy: {}.",
        session.engine().config().max_guesses,
        session.difficulty(),
        session.engine().strategy_kind()
    )?;
    print_help(out)
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "  {} green: right letter, right spot", "A".black().on_green())?;
    writeln!(out, "  {} yellow: in the word, wrong spot", "A".black().on_yellow())?;
    writeln!(out, "  {} gray: not in the word", "A".white().on_bright_black())?;
    writeln!(
        out,
        "Commands: 'new', 'hint [WORD]', 'difficulty easy|medium|hard', 'help', 'quit'\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::lexicon::Lexicon;
    use crate::session::Engine;

    fn session() -> Session {
        let lexicon = Lexicon::from_strs(&["apple", "angle", "crane", "slate", "grape"]).unwrap();
        Session::new(
            Engine::new(lexicon, EngineConfig::default().with_seed(4)),
            Difficulty::Medium,
        )
    }

    fn play(session: &mut Session, script: &str) -> (PlaySummary, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let summary = run_play(session, script.as_bytes(), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game_is_scored() {
        let mut session = session();
        let secret = session.game().secret().text().to_string();
        let (summary, out) = play(&mut session, &format!("{secret}\nquit\n"));

        assert_eq!(summary, PlaySummary { games_played: 1, score: 1 });
        assert!(out.contains("Solved in 1 guess!"));
        assert!(out.contains("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn bad_input_is_reported_and_not_counted() {
        let mut session = session();
        let (summary, out) = play(&mut session, "abc\nhint\nhint grapy\n");

        assert_eq!(summary.games_played, 0);
        assert!(out.contains("exactly 5 letters"));
        assert!(out.contains("Make a guess first"));
        assert!(out.contains("Closest word to GRAPY: GRAPE"));
        assert!(session.game().guesses().is_empty());
    }

    #[test]
    fn difficulty_command() {
        let mut session = session();
        let (_, out) = play(&mut session, "difficulty hard\ndifficulty extreme\nq\n");

        assert_eq!(session.difficulty(), Difficulty::Hard);
        assert!(out.contains("Difficulty set to hard"));
        assert!(out.contains("❌"));
    }

    #[test]
    fn losing_game_reveals_secret() {
        let mut session = session();
        let secret = session.game().secret().text().to_string();
        let wrong = ["apple", "angle", "crane", "slate", "grape"]
            .into_iter()
            .find(|w| *w != secret)
            .unwrap();
        let script = format!("{}quit\n", format!("{wrong}\n").repeat(6));
        let (summary, out) = play(&mut session, &script);

        assert_eq!(summary, PlaySummary { games_played: 1, score: 0 });
        assert!(out.contains(&format!("The word was {}", secret.to_uppercase())));
    }

    #[test]
    fn command_parsing() {
        assert!(matches!(parse_command("quit"), Command::Quit));
        assert!(matches!(parse_command("hint"), Command::Hint(None)));
        assert!(matches!(parse_command("hint crane"), Command::Hint(Some("crane"))));
        assert!(matches!(parse_command("d easy"), Command::Difficulty("easy")));
        assert!(matches!(parse_command("crane"), Command::Guess("crane")));
        // a bare "difficulty" is treated as a guess and rejected by the engine
        assert!(matches!(parse_command("difficulty"), Command::Guess(_)));
    }
}
