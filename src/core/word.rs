//! Word representation
//!
//! A Word stores a lowercase-normalized alphabetic word of any positive length.
//! Letters are Unicode scalar values, so one slot is one `char`.

use crate::error::{InvalidReason, WordRole, WordleError};
use rustc_hash::FxHashMap;
use std::fmt;

/// An alphabetic word, lowercase-normalized for comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `InvalidReason` if the text is empty or contains anything other
    /// than alphabetic characters. Non-ASCII letters such as `é` or `ß` are
    /// accepted.
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, InvalidReason> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(InvalidReason::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(InvalidReason::NonAlphabetic);
        }

        let letters: Vec<char> = text.chars().map(fold_case).collect();
        Ok(Self {
            text: letters.iter().collect(),
            letters,
        })
    }

    /// Create a Word that must be exactly `size` letters long
    ///
    /// Length is checked before content, so `"abc1"` against size 5 reports a
    /// length problem.
    ///
    /// # Errors
    /// Returns `InvalidReason::WrongLength` on a size mismatch, otherwise the
    /// same errors as [`Word::new`].
    pub fn with_size(text: impl Into<String>, size: usize) -> Result<Self, InvalidReason> {
        let text: String = text.into();
        let actual = text.chars().count();

        if actual != size {
            return Err(InvalidReason::WrongLength {
                expected: size,
                actual,
            });
        }

        Self::new(text)
    }

    /// Validate request input of a given role against an expected size
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` carrying the role and the input.
    pub fn parse(text: &str, size: usize, role: WordRole) -> Result<Self, WordleError> {
        Self::with_size(text, size).map_err(|reason| WordleError::invalid(role, text, reason))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the lowercase letters, one per slot
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Words are never empty once constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used as the remaining-letter pool during evaluation.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

/// Lowercase a letter, keeping it as-is when lowercasing would change the slot count
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), &['c', 'r', 'a', 'n', 'e']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("wordlewordle").unwrap().len(), 12);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(InvalidReason::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(InvalidReason::NonAlphabetic)); // Number
        assert_eq!(Word::new("cran "), Err(InvalidReason::NonAlphabetic)); // Space
        assert_eq!(Word::new("cran!"), Err(InvalidReason::NonAlphabetic)); // Punctuation
    }

    #[test]
    fn with_size_checks_length_first() {
        assert_eq!(
            Word::with_size("abc1", 5),
            Err(InvalidReason::WrongLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(Word::with_size("abcd1", 5), Err(InvalidReason::NonAlphabetic));
        assert!(Word::with_size("abcde", 5).is_ok());
    }

    #[test]
    fn with_size_counts_characters_not_bytes() {
        assert_eq!(
            Word::with_size("café", 5),
            Err(InvalidReason::WrongLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn parse_attaches_role() {
        let err = Word::parse("cr4ne", 5, WordRole::Guess).unwrap_err();
        assert!(matches!(
            err,
            WordleError::InvalidWord {
                role: WordRole::Guess,
                reason: InvalidReason::NonAlphabetic,
                ..
            }
        ));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), 'c');
        assert_eq!(word.char_at(4), 'e');
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&'s'), Some(&1));
        assert_eq!(counts.get(&'p'), Some(&1));
        assert_eq!(counts.get(&'e'), Some(&2));
        assert_eq!(counts.get(&'d'), Some(&1));
    }

    #[test]
    fn word_char_counts_all_same() {
        let word = Word::new("aaaaa").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&'a'), Some(&5));
    }

    #[test]
    fn word_accepts_unicode_letters() {
        let word = Word::new("Éclat").unwrap();
        assert_eq!(word.text(), "éclat");
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(0), 'é');

        let word = Word::new("straße").unwrap();
        assert_eq!(word.len(), 6);
        assert_eq!(word.char_at(4), 'ß');
    }

    #[test]
    fn unicode_length_counts_letters() {
        assert!(Word::with_size("éclat", 5).is_ok());
        assert!(Word::with_size("éclat", 6).is_err());
    }

    #[test]
    fn unicode_non_letters_rejected() {
        assert_eq!(Word::new("caf\u{e9}1"), Err(InvalidReason::NonAlphabetic));
        assert_eq!(Word::new("héllo!"), Err(InvalidReason::NonAlphabetic));
        assert_eq!(Word::new("😀abc"), Err(InvalidReason::NonAlphabetic));
    }

    #[test]
    fn multi_char_lowercase_keeps_slot_count() {
        // 'İ' lowercases to two chars; the slot keeps the original letter
        let word = Word::new("İzmir").unwrap();
        assert_eq!(word.len(), 5);
        assert_eq!(word.char_at(0), 'İ');
        assert_eq!(word.char_at(1), 'z');
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        assert_eq!(Word::new("crane").unwrap(), Word::new("CRANE").unwrap());
        assert_ne!(Word::new("crane").unwrap(), Word::new("slate").unwrap());
    }
}
