//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles};
use crate::commands::{GuessOutcome, SegmentResult, SweepResult};
use colored::Colorize;
use serde::Serialize;

/// Print a guess result as tiles and emoji
pub fn print_guess_outcome(outcome: &GuessOutcome) {
    println!("\n  {}", feedback_tiles(&outcome.feedback));
    println!("  {}", outcome.feedback.to_emoji());

    if outcome.feedback.is_solved() {
        println!("\n{}", "✅ Correct!".green().bold());
    }
}

/// Print segmented words, one per line
pub fn print_segment_result(result: &SegmentResult) {
    for (i, word) in result.segmented.iter().enumerate() {
        println!("  {} {}", format!("{:>3}.", i + 1).bright_black(), word);
    }
}

/// Print a sweep summary
pub fn print_sweep_result(result: &SweepResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SWEEP:".bright_cyan().bold(),
        result.guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Pool:".bright_cyan().bold());
    println!("   Words scored:     {}", result.rows.len());
    if result.skipped > 0 {
        println!("   Skipped (length): {}", result.skipped);
    }
    println!("   Distinct patterns: {}", result.distribution.len());
    println!("   Solved outright:  {}", result.solved());
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.rows.len().max(1) as f64;
    for (pattern, count) in result.ranked_patterns() {
        let bar = create_progress_bar(count as f64, total, 30);
        println!("   {pattern} {} {count:4}", bar.green());
    }
}

/// Print any serializable result as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
