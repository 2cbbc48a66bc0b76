//! Core domain types
//!
//! Words and the guess evaluation algorithm. Everything here is pure and
//! free of shared state.

mod feedback;
mod word;

pub use feedback::{Classification, Feedback, GuessResult, evaluate};
pub use word::Word;
