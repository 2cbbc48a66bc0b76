//! Wordle Feedback
//!
//! Scores word guesses letter by letter, handling repeated letters the way
//! the puzzle does: a letter only earns credit as many times as the target
//! contains it, and exact matches claim their letter first.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_feedback::core::{Classification, Feedback, Word};
//!
//! let target = Word::new("snake").unwrap();
//! let guess = Word::new("crane").unwrap();
//!
//! let feedback = Feedback::evaluate(&target, &guess).unwrap();
//! assert_eq!(feedback.to_emoji(), "⬜⬜🟩🟨🟩");
//! assert_eq!(feedback.count(Classification::Correct), 2);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Target selection policies
pub mod target;

// Word lists
pub mod wordlists;

// Free-text segmentation
pub mod segment;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::WordleError;
