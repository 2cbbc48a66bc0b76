//! Free-text word segmentation
//!
//! Splits run-together prose ("thisisagoodword") into words. Callers treat
//! a [`Segmenter`] as a black box; [`DictionarySegmenter`] is the default.

mod dictionary;

pub use dictionary::DictionarySegmenter;

use crate::error::WordleError;

/// Splits text into an ordered sequence of substrings
pub trait Segmenter {
    /// Split non-blank, trimmed text
    fn split(&self, text: &str) -> Vec<String>;

    /// Segment caller text
    ///
    /// # Errors
    /// Returns `WordleError::EmptyInput` for blank or whitespace-only text.
    fn segment(&self, text: &str) -> Result<Vec<String>, WordleError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WordleError::EmptyInput);
        }
        Ok(self.split(text))
    }
}

/// Segment text with the embedded dictionary
///
/// # Errors
/// Returns `WordleError::EmptyInput` for blank or whitespace-only text.
///
/// # Examples
/// ```
/// use wordle_feedback::segment::segment;
///
/// assert_eq!(segment("thisisagoodword").unwrap(), vec!["this", "is", "a", "good", "word"]);
/// assert!(segment("   ").is_err());
/// ```
pub fn segment(text: &str) -> Result<Vec<String>, WordleError> {
    DictionarySegmenter::embedded().segment(text)
}
