//! Guess evaluation and per-slot feedback
//!
//! Each slot of a guess is classified against the target:
//! - Correct: letter in the right position
//! - Present: letter elsewhere in the target, with an occurrence still unclaimed
//! - Absent: no unclaimed occurrence left
//!
//! Letters are claimed from a per-evaluation pool of remaining counts, exact
//! matches first, so a repeated guess letter never earns more credit than the
//! target has copies of it.

use super::Word;
use crate::error::WordleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Classification of a single guess slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Absent,
    Present,
    Correct,
}

impl Classification {
    /// Emoji tile for this classification
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// Feedback for one slot of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessResult {
    pub slot: usize,
    #[serde(rename = "guess")]
    pub letter: char,
    #[serde(rename = "result")]
    pub classification: Classification,
}

impl GuessResult {
    #[must_use]
    pub const fn new(slot: usize, letter: char, classification: Classification) -> Self {
        Self {
            slot,
            letter,
            classification,
        }
    }
}

/// Complete feedback for a guess, one result per slot in slot order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback(Vec<GuessResult>);

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the target's pool
    /// 2. Second pass: mark present letters while the pool still holds a copy
    /// 3. Everything else is absent
    ///
    /// # Errors
    /// Returns `WordleError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::core::{Classification, Feedback, Word};
    ///
    /// let target = Word::new("blade").unwrap();
    /// let guess = Word::new("eagle").unwrap();
    /// let feedback = Feedback::evaluate(&target, &guess).unwrap();
    ///
    /// // The target's only E is claimed by the exact match in the last slot
    /// assert_eq!(feedback.results()[0].classification, Classification::Absent);
    /// assert_eq!(feedback.results()[4].classification, Classification::Correct);
    /// ```
    pub fn evaluate(target: &Word, guess: &Word) -> Result<Self, WordleError> {
        if target.len() != guess.len() {
            return Err(WordleError::LengthMismatch {
                target: target.len(),
                guess: guess.len(),
            });
        }

        let mut classes = vec![Classification::Absent; guess.len()];
        let mut resolved = vec![false; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                classes[i] = Classification::Correct;
                resolved[i] = true;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, &g) in guess.chars().iter().enumerate() {
            if resolved[i] {
                continue;
            }
            if let Some(count) = target_available.get_mut(&g)
                && *count > 0
            {
                classes[i] = Classification::Present;
                *count -= 1;
            }
        }

        let results: Vec<GuessResult> = guess
            .chars()
            .iter()
            .zip(classes)
            .enumerate()
            .map(|(slot, (&letter, class))| GuessResult::new(slot, letter, class))
            .collect();

        trace!(answer = %target, guess = %guess, "evaluated guess");

        Ok(Self(results))
    }

    /// Per-slot results, ordered by slot
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[GuessResult] {
        &self.0
    }

    /// Consume into the ordered result vector
    #[must_use]
    pub fn into_results(self) -> Vec<GuessResult> {
        self.0
    }

    /// Classifications in slot order
    pub fn classifications(&self) -> impl Iterator<Item = Classification> + '_ {
        self.0.iter().map(|r| r.classification)
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every slot is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.classifications().all(|c| c == Classification::Correct)
    }

    /// Count the slots with the given classification
    #[must_use]
    pub fn count(&self, classification: Classification) -> usize {
        self.classifications().filter(|&c| c == classification).count()
    }

    /// Convert feedback to emoji string like "⬜⬜🟩🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.classifications().map(Classification::emoji).collect()
    }
}

/// Evaluate a guess, returning the ordered per-slot results
///
/// # Errors
/// Returns `WordleError::LengthMismatch` if the words differ in length.
pub fn evaluate(target: &Word, guess: &Word) -> Result<Vec<GuessResult>, WordleError> {
    Feedback::evaluate(target, guess).map(Feedback::into_results)
}
