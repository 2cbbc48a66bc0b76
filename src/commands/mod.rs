//! Command implementations
//!
//! One handler per request kind. Handlers return data; printing lives in
//! `output`.

pub mod guess;
pub mod sweep;
pub mod wordseg;

pub use guess::{GuessOutcome, GuessRequest, run_guess};
pub use sweep::{SweepResult, SweepRow, run_sweep};
pub use wordseg::{SegmentResult, run_wordseg};
