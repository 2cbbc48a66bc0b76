//! Word lists
//!
//! The target pool is embedded at build time; a file can replace it at
//! process start. Either way the list is fixed once constructed.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, WORD_LIST, WORD_LIST_COUNT};

use crate::core::Word;
use crate::error::WordleError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::sync::LazyLock;

static EMBEDDED: LazyLock<WordList> = LazyLock::new(|| {
    WordList::from_words(loader::words_from_slice(WORD_LIST))
        .unwrap_or_else(|_| unreachable!("embedded word list is validated by tests"))
});

/// Ordered, non-empty pool of candidate targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// # Errors
    /// Returns `WordleError::EmptyWordList` if `words` is empty.
    pub fn from_words(words: Vec<Word>) -> Result<Self, WordleError> {
        if words.is_empty() {
            return Err(WordleError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> &'static Self {
        &EMBEDDED
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Construction rejects empty lists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Pick one word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.words
            .choose(rng)
            .unwrap_or_else(|| unreachable!("word list is never empty"))
    }
}
