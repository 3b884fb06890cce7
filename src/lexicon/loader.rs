//! Word list loading utilities
//!
//! Load a lexicon from a file, or convert embedded constants into words.

use super::Lexicon;
use crate::core::Word;
use crate::error::{EngineError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a lexicon from a file with one word per line
///
/// Blank lines and invalid entries are skipped.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `EmptyLexicon` if it holds no
/// valid words.
///
/// # Examples
/// ```no_run
/// use wrdly::lexicon::loader::load_from_file;
///
/// let lexicon = load_from_file("data/lexicon.txt").unwrap();
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<Word> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect();

    let lexicon = Lexicon::from_words(words)?;
    debug!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
    Ok(lexicon)
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wrdly::lexicon::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wrdly-loader-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\n\n  slate  \nbogus-entry\nIRATE").unwrap();
        drop(file);

        let lexicon = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = lexicon.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/here/words.txt");
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }
}
