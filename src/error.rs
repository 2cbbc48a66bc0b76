//! Error types
//!
//! Every failure is a caller-facing rejection: nothing here is transient and
//! nothing is retried.

use std::fmt;
use thiserror::Error;

/// Which side of an evaluation a word was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRole {
    Target,
    Guess,
}

impl fmt::Display for WordRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Target => write!(f, "target"),
            Self::Guess => write!(f, "guess"),
        }
    }
}

/// Why a word failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    WrongLength { expected: usize, actual: usize },
    NonAlphabetic,
    Empty,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} letters, got {actual}")
            }
            Self::NonAlphabetic => write!(f, "must contain only letters"),
            Self::Empty => write!(f, "must not be empty"),
        }
    }
}

/// Errors raised while selecting targets, evaluating guesses or segmenting text
#[derive(Debug, Error)]
pub enum WordleError {
    /// A target or guess failed length or alphabetic validation.
    #[error("invalid {role} '{input}': {reason}")]
    InvalidWord {
        role: WordRole,
        input: String,
        reason: InvalidReason,
    },

    /// Target and guess have different lengths.
    #[error("guess length {guess} must match target word length {target}")]
    LengthMismatch { target: usize, guess: usize },

    /// Segmentation was asked to split blank text.
    #[error("empty text provided")]
    EmptyInput,

    /// A word list contained no usable entries.
    #[error("word list is empty")]
    EmptyWordList,

    /// A word list file could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

impl WordleError {
    /// Attach a role to a bare validation failure
    #[must_use]
    pub(crate) fn invalid(role: WordRole, input: &str, reason: InvalidReason) -> Self {
        Self::InvalidWord {
            role,
            input: input.to_string(),
            reason,
        }
    }
}
