//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordList;
use crate::core::Word;
use crate::error::{WordRole, WordleError};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a word list from a file
///
/// One word per line; blank lines are skipped. Unlike the embedded list, a
/// bad line is an error rather than silently dropped.
///
/// # Errors
///
/// Returns `WordleError::Io` if the file cannot be read,
/// `WordleError::InvalidWord` for a non-alphabetic line, and
/// `WordleError::EmptyWordList` if no words remain.
///
/// # Examples
/// ```no_run
/// use wordle_feedback::wordlists::loader::load_from_file;
///
/// let list = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", list.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_lines(&content)?;

    info!(path = %path.display(), words = list.len(), "loaded word list");
    Ok(list)
}

/// Parse newline-separated words into a list
///
/// # Errors
///
/// Same as [`load_from_file`], minus I/O.
pub fn parse_lines(content: &str) -> Result<WordList, WordleError> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Word::parse(line, line.chars().count(), WordRole::Target))
        .collect::<Result<Vec<_>, _>>()?;

    WordList::from_words(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_feedback::wordlists::loader::words_from_slice;
/// use wordle_feedback::wordlists::WORD_LIST;
///
/// let words = words_from_slice(WORD_LIST);
/// assert_eq!(words.len(), WORD_LIST.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "two words", "", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_lines_skips_blank_lines_and_trims() {
        let list = parse_lines("crane\n\n  Slate \nirate\n").unwrap();
        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_lines_rejects_bad_entry() {
        let err = parse_lines("crane\ncr4ne\n").unwrap_err();
        assert!(matches!(
            err,
            WordleError::InvalidWord {
                reason: InvalidReason::NonAlphabetic,
                ..
            }
        ));
    }

    #[test]
    fn parse_lines_rejects_empty_content() {
        assert!(matches!(
            parse_lines("\n  \n"),
            Err(WordleError::EmptyWordList)
        ));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/wordle/words.txt").unwrap_err();
        assert!(matches!(err, WordleError::Io(_)));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_feedback_{}.txt", std::process::id()));
        fs::write(&path, "world\nplane\n").unwrap();

        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[1].text(), "plane");
    }
}
