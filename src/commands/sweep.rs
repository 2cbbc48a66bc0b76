//! Sweep command
//!
//! Scores one guess against every word in the pool and tallies how often
//! each feedback pattern comes up.

use crate::core::{Feedback, Word};
use crate::error::{WordRole, WordleError};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Feedback for the guess against one pool word
#[derive(Debug, Clone)]
pub struct SweepRow {
    pub target: Word,
    pub feedback: Feedback,
}

/// Result of sweeping a guess over the pool
#[derive(Debug)]
pub struct SweepResult {
    pub guess: Word,
    pub rows: Vec<SweepRow>,
    /// Emoji pattern -> number of pool words producing it
    pub distribution: FxHashMap<String, usize>,
    /// Pool words whose length differs from the guess
    pub skipped: usize,
    pub duration: Duration,
}

impl SweepResult {
    /// Patterns sorted by descending frequency, ties by pattern
    #[must_use]
    pub fn ranked_patterns(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .distribution
            .iter()
            .map(|(pattern, &count)| (pattern.as_str(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// Number of pool words the guess would solve outright
    #[must_use]
    pub fn solved(&self) -> usize {
        self.rows.iter().filter(|row| row.feedback.is_solved()).count()
    }
}

/// Score `guess` against every pool word of the same length
///
/// Rows keep the pool order. Set `show_progress` for an interactive bar.
///
/// # Errors
///
/// Returns `WordleError::InvalidWord` if the guess is empty or not
/// alphabetic.
pub fn run_sweep(
    words: &WordList,
    guess: &str,
    show_progress: bool,
) -> Result<SweepResult, WordleError> {
    let guess = Word::parse(guess, guess.chars().count(), WordRole::Guess)?;
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let rows: Vec<SweepRow> = words
        .words()
        .par_iter()
        .filter_map(|target| {
            pb.inc(1);
            Feedback::evaluate(target, &guess)
                .ok()
                .map(|feedback| SweepRow {
                    target: target.clone(),
                    feedback,
                })
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: FxHashMap<String, usize> = FxHashMap::default();
    for row in &rows {
        *distribution.entry(row.feedback.to_emoji()).or_insert(0) += 1;
    }

    let skipped = words.len() - rows.len();
    let duration = start.elapsed();
    info!(
        guess = %guess,
        scored = rows.len(),
        skipped,
        patterns = distribution.len(),
        "sweep finished"
    );

    Ok(SweepResult {
        guess,
        rows,
        distribution,
        skipped,
        duration,
    })
}
