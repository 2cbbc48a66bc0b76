//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_guess_outcome, print_json, print_segment_result, print_sweep_result};
