//! Guess command
//!
//! Resolves a target, validates the guess, and scores it. One call serves
//! every target mode.

use crate::config::DEFAULT_WORD_SIZE;
use crate::core::{Classification, Feedback, Word};
use crate::error::{WordRole, WordleError};
use crate::target::{TargetMode, TargetSelector};
use tracing::debug;

/// A single guess request
#[derive(Debug, Clone)]
pub struct GuessRequest {
    pub mode: TargetMode,
    pub guess: String,
    /// Expected guess length; ignored in literal mode, where the target sets it
    pub size: usize,
}

impl GuessRequest {
    #[must_use]
    pub fn new(mode: TargetMode, guess: impl Into<String>) -> Self {
        Self {
            mode,
            guess: guess.into(),
            size: DEFAULT_WORD_SIZE,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score a guess against the target chosen by `request.mode`
///
/// # Errors
///
/// Returns an error if:
/// - A literal target is not alphabetic (`InvalidWord`)
/// - The guess has the wrong length or is not alphabetic (`InvalidWord`)
/// - The resolved target and guess differ in length (`LengthMismatch`)
pub fn run_guess(
    selector: &TargetSelector,
    request: &GuessRequest,
) -> Result<GuessOutcome, WordleError> {
    let target = selector.select(&request.mode)?;

    let size = match request.mode {
        TargetMode::Literal(_) => target.len(),
        TargetMode::Fixed | TargetMode::Random { .. } => request.size,
    };
    let guess = Word::parse(&request.guess, size, WordRole::Guess)?;

    let feedback = Feedback::evaluate(&target, &guess)?;
    debug!(
        guess = %guess,
        correct = feedback.count(Classification::Correct),
        "guess scored"
    );

    Ok(GuessOutcome {
        target,
        guess,
        feedback,
    })
}
