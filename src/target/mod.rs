//! Target word selection
//!
//! Fixed, seeded-random, and literal policies for choosing the word a guess
//! is scored against.

mod selector;

pub use selector::{TargetMode, TargetSelector, select_target};
