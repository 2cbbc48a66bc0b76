//! Wordle Feedback - CLI
//!
//! Score guesses against the daily word, a seeded random word, or a word of
//! your choosing, and split run-together text into words.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_feedback::{
    commands::{GuessRequest, run_guess, run_sweep, run_wordseg},
    config::{DEFAULT_WORD_SIZE, WordListSource},
    output::{print_guess_outcome, print_json, print_segment_result, print_sweep_result},
    segment::DictionarySegmenter,
    target::{TargetMode, TargetSelector},
};

#[derive(Parser)]
#[command(
    name = "wordle_feedback",
    about = "Score Wordle guesses with duplicate-aware letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Target pool: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the word of the day (fixed for this process)
    Daily {
        /// Your guess
        guess: String,

        /// Word size
        #[arg(short, long, default_value_t = DEFAULT_WORD_SIZE)]
        size: usize,
    },

    /// Guess a randomly chosen word
    Random {
        /// Your guess
        guess: String,

        /// Word size
        #[arg(short, long, default_value_t = DEFAULT_WORD_SIZE)]
        size: usize,

        /// Random seed; the same seed always picks the same word
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Guess a word you supply
    Word {
        /// The target word
        word: String,

        /// Your guess for the word
        guess: String,
    },

    /// Split run-together text into words
    Wordseg {
        /// Text to segment
        text: String,
    },

    /// Score a guess against every word in the pool
    Sweep {
        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wordle_feedback=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = WordListSource::from_arg(cli.wordlist.as_deref());
    let words = source
        .load()
        .with_context(|| format!("could not load word list {source:?}"))?;
    let selector = TargetSelector::new(words);

    match cli.command {
        Commands::Daily { guess, size } => {
            let request = GuessRequest::new(TargetMode::Fixed, guess).with_size(size);
            run_guess_command(&selector, &request, cli.json)
        }
        Commands::Random { guess, size, seed } => {
            let request = GuessRequest::new(TargetMode::Random { seed }, guess).with_size(size);
            run_guess_command(&selector, &request, cli.json)
        }
        Commands::Word { word, guess } => {
            let request = GuessRequest::new(TargetMode::Literal(word), guess);
            run_guess_command(&selector, &request, cli.json)
        }
        Commands::Wordseg { text } => run_wordseg_command(&text, cli.json),
        Commands::Sweep { guess } => run_sweep_command(&selector, &guess, cli.json),
    }
}

fn run_guess_command(
    selector: &TargetSelector,
    request: &GuessRequest,
    json: bool,
) -> Result<()> {
    let outcome = run_guess(selector, request)?;

    if json {
        print_json(&outcome.feedback)?;
    } else {
        print_guess_outcome(&outcome);
    }
    Ok(())
}

fn run_wordseg_command(text: &str, json: bool) -> Result<()> {
    let result = run_wordseg(DictionarySegmenter::embedded(), text)
        .context("Error in word segmentation")?;

    if json {
        print_json(&result)?;
    } else {
        print_segment_result(&result);
    }
    Ok(())
}

fn run_sweep_command(selector: &TargetSelector, guess: &str, json: bool) -> Result<()> {
    let result = run_sweep(selector.word_list(), guess, !json)?;

    if json {
        let rows: Vec<_> = result
            .rows
            .iter()
            .map(|row| (row.target.text(), &row.feedback))
            .collect();
        print_json(&rows)?;
    } else {
        print_sweep_result(&result);
    }
    Ok(())
}
