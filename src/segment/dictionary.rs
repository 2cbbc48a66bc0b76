//! Dictionary-driven segmentation
//!
//! Words are costed by frequency rank (Zipf's law): the word at rank `r` in
//! an `n`-word dictionary costs `ln((r + 1) * ln n)`. A dynamic program picks
//! the split of each run with the lowest total cost. A run is ASCII letters,
//! digits, and inner apostrophes, so contractions survive as one piece.

use super::Segmenter;
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Cost of a character that starts no dictionary word
const UNKNOWN_CHAR_COST: f64 = 1.0e6;

static EMBEDDED: LazyLock<DictionarySegmenter> =
    LazyLock::new(|| DictionarySegmenter::new(DICTIONARY.iter().copied()));

/// Frequency-ranked dictionary segmenter
#[derive(Debug, Clone)]
pub struct DictionarySegmenter {
    costs: FxHashMap<String, f64>,
    max_word_len: usize,
    digit_run_cost: f64,
}

impl DictionarySegmenter {
    /// Build from words in descending frequency order
    ///
    /// Later duplicates keep the cost of their first (more frequent) rank.
    pub fn new<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.trim().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let scale = (words.len().max(2) as f64).ln();
        let mut costs = FxHashMap::default();
        for (rank, word) in words.iter().enumerate() {
            costs
                .entry(word.clone())
                .or_insert_with(|| (((rank + 1) as f64) * scale).ln());
        }

        let max_word_len = words.iter().map(String::len).max().unwrap_or(1);
        let digit_run_cost = costs.values().copied().fold(0.0, f64::max) + 1.0;

        Self {
            costs,
            max_word_len,
            digit_run_cost,
        }
    }

    /// Segmenter over the embedded dictionary
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    /// Number of dictionary entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    fn piece_cost(&self, piece: &str) -> Option<f64> {
        if let Some(&cost) = self.costs.get(piece) {
            return Some(cost);
        }
        if piece.bytes().all(|b| b.is_ascii_digit()) {
            return Some(self.digit_run_cost);
        }
        (piece.len() == 1).then_some(UNKNOWN_CHAR_COST)
    }

    /// Lowest-cost split of one run
    fn split_run(&self, run: &str) -> Vec<String> {
        let lower = run.to_ascii_lowercase();
        let n = lower.len();

        // best[i] = (cost of best split of lower[..i], length of its last piece)
        let mut best: Vec<(f64, usize)> = vec![(0.0, 0); n + 1];
        for i in 1..=n {
            let mut choice = (f64::INFINITY, 1);
            for k in 1..=i {
                let piece = &lower[i - k..i];
                if k > self.max_word_len && !piece.bytes().all(|b| b.is_ascii_digit()) {
                    break;
                }
                if let Some(cost) = self.piece_cost(piece) {
                    let total = best[i - k].0 + cost;
                    if total < choice.0 {
                        choice = (total, k);
                    }
                }
            }
            best[i] = choice;
        }

        let mut pieces = Vec::new();
        let mut end = n;
        while end > 0 {
            let k = best[end].1;
            pieces.push(run[end - k..end].to_string());
            end -= k;
        }
        pieces.reverse();
        pieces
    }
}

impl Segmenter for DictionarySegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '\''))
            .map(|run| run.trim_matches('\''))
            .filter(|run| !run.is_empty())
            .flat_map(|run| self.split_run(run))
            .collect()
    }
}
