//! Target selection policies
//!
//! A selector owns the target pool and the process-lifetime fixed target.
//! Seeded picks build their own RNG per call, so no random state is shared
//! between requests.

use crate::core::Word;
use crate::error::{WordRole, WordleError};
use crate::wordlists::WordList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::LazyLock;
use tracing::debug;

static GLOBAL: LazyLock<TargetSelector> =
    LazyLock::new(|| TargetSelector::new(WordList::embedded().clone()));

/// How a request wants its target chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetMode {
    /// The process-wide fixed target
    Fixed,
    /// A uniform pick from the pool, reproducible when seeded
    Random { seed: Option<u64> },
    /// A caller-supplied word, validated but not checked against the pool
    Literal(String),
}

/// Resolves targets for evaluation requests
#[derive(Debug, Clone)]
pub struct TargetSelector {
    words: WordList,
    fixed: Word,
}

impl TargetSelector {
    /// Create a selector, picking the fixed target from ambient randomness
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self::with_rng(words, &mut rand::rng())
    }

    /// Create a selector, picking the fixed target from `rng`
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(words: WordList, rng: &mut R) -> Self {
        let fixed = words.choose(rng).clone();
        debug!(pool = words.len(), "fixed target chosen");
        Self { words, fixed }
    }

    /// Selector over the embedded list, created on first use
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// The fixed target; never changes for the life of the selector
    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &Word {
        &self.fixed
    }

    #[inline]
    #[must_use]
    pub const fn word_list(&self) -> &WordList {
        &self.words
    }

    /// Resolve the target for one request
    ///
    /// # Errors
    /// Returns `WordleError::InvalidWord` if a literal target is empty or not
    /// purely alphabetic. Its expected size is its own length.
    ///
    /// # Examples
    /// ```
    /// use wordle_feedback::target::{TargetMode, TargetSelector};
    ///
    /// let selector = TargetSelector::global();
    /// let a = selector.select(&TargetMode::Random { seed: Some(3) }).unwrap();
    /// let b = selector.select(&TargetMode::Random { seed: Some(3) }).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn select(&self, mode: &TargetMode) -> Result<Word, WordleError> {
        let target = match mode {
            TargetMode::Fixed => self.fixed.clone(),
            TargetMode::Random { seed: Some(seed) } => {
                let mut rng = StdRng::seed_from_u64(*seed);
                self.words.choose(&mut rng).clone()
            }
            TargetMode::Random { seed: None } => self.words.choose(&mut rand::rng()).clone(),
            TargetMode::Literal(text) => Word::parse(text, text.chars().count(), WordRole::Target)?,
        };

        debug!(?mode, "target selected");
        Ok(target)
    }
}

/// Resolve a target using the global selector
///
/// # Errors
/// See [`TargetSelector::select`].
pub fn select_target(mode: &TargetMode) -> Result<Word, WordleError> {
    TargetSelector::global().select(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidReason;
    use crate::wordlists::loader::parse_lines;

    fn selector() -> TargetSelector {
        TargetSelector::with_rng(WordList::embedded().clone(), &mut StdRng::seed_from_u64(1))
    }

    #[test]
    fn fixed_target_is_stable() {
        let selector = selector();
        let first = selector.select(&TargetMode::Fixed).unwrap();
        for _ in 0..20 {
            assert_eq!(selector.select(&TargetMode::Fixed).unwrap(), first);
        }
        assert_eq!(&first, selector.fixed());
    }

    #[test]
    fn fixed_target_comes_from_pool() {
        let selector = selector();
        assert!(selector.word_list().contains(selector.fixed()));
    }

    #[test]
    fn global_fixed_target_is_shared() {
        let a = select_target(&TargetMode::Fixed).unwrap();
        let b = TargetSelector::global().select(&TargetMode::Fixed).unwrap();
        assert_eq!(a, b);
        assert!(WordList::embedded().contains(&a));
    }

    #[test]
    fn global_fixed_target_same_across_threads() {
        let expected = select_target(&TargetMode::Fixed).unwrap();
        let picks: Vec<Word> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| select_target(&TargetMode::Fixed).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(picks.len(), 8);
        assert!(picks.iter().all(|w| *w == expected));
    }

    #[test]
    fn same_seed_same_target() {
        let selector = selector();
        for seed in 0..50 {
            let mode = TargetMode::Random { seed: Some(seed) };
            let a = selector.select(&mode).unwrap();
            let b = selector.select(&mode).unwrap();
            assert_eq!(a, b, "seed {seed} was not reproducible");
        }
    }

    #[test]
    fn seeded_pick_independent_of_selector_instance() {
        let a = selector();
        let b = TargetSelector::new(WordList::embedded().clone());
        let mode = TargetMode::Random { seed: Some(99) };
        assert_eq!(a.select(&mode).unwrap(), b.select(&mode).unwrap());
    }

    #[test]
    fn seeds_spread_over_pool() {
        let selector = selector();
        let distinct: std::collections::HashSet<Word> = (0..200)
            .map(|seed| {
                selector
                    .select(&TargetMode::Random { seed: Some(seed) })
                    .unwrap()
            })
            .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn unseeded_pick_comes_from_pool() {
        let selector = selector();
        for _ in 0..20 {
            let target = selector.select(&TargetMode::Random { seed: None }).unwrap();
            assert!(selector.word_list().contains(&target));
        }
    }

    #[test]
    fn single_word_pool_always_picks_it() {
        let selector = TargetSelector::new(parse_lines("zebra").unwrap());
        assert_eq!(selector.fixed().text(), "zebra");
        assert_eq!(
            selector
                .select(&TargetMode::Random { seed: Some(5) })
                .unwrap()
                .text(),
            "zebra"
        );
    }

    #[test]
    fn literal_accepts_any_alphabetic_word() {
        let selector = selector();
        let target = selector
            .select(&TargetMode::Literal("Rustacean".to_string()))
            .unwrap();
        assert_eq!(target.text(), "rustacean");
        assert!(!selector.word_list().contains(&target));
    }

    #[test]
    fn literal_rejects_non_alphabetic() {
        let err = selector()
            .select(&TargetMode::Literal("w0rld".to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            WordleError::InvalidWord {
                role: WordRole::Target,
                reason: InvalidReason::NonAlphabetic,
                ..
            }
        ));
    }

    #[test]
    fn literal_rejects_empty() {
        let err = selector()
            .select(&TargetMode::Literal(String::new()))
            .unwrap_err();
        assert!(matches!(
            err,
            WordleError::InvalidWord {
                reason: InvalidReason::WrongLength { .. } | InvalidReason::Empty,
                ..
            }
        ));
    }
}
