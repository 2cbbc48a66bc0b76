//! Formatting utilities for terminal output

use crate::core::{Classification, Feedback};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile like " A "
#[must_use]
pub fn letter_tile(letter: char, classification: Classification) -> ColoredString {
    let tile = format!(" {} ", letter.to_uppercase());
    match classification {
        Classification::Correct => tile.black().on_green().bold(),
        Classification::Present => tile.black().on_yellow().bold(),
        Classification::Absent => tile.white().on_bright_black(),
    }
}

/// Render feedback as a row of coloured tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .results()
        .iter()
        .map(|r| letter_tile(r.letter, r.classification).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
