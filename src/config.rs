//! Runtime configuration
//!
//! There is very little to configure: the word size a request expects and
//! where the target pool comes from.

use crate::error::WordleError;
use crate::wordlists::{WordList, loader};
use std::path::PathBuf;

/// Word size used when a request does not override it
pub const DEFAULT_WORD_SIZE: usize = 5;

/// Where the target pool is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-separated file read once at startup
    File(PathBuf),
}

impl WordListSource {
    /// Interpret a CLI value: `embedded` (or nothing) or a file path
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("embedded") => Self::Embedded,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }

    /// Load the configured list
    ///
    /// # Errors
    /// Propagates loader errors for file sources.
    pub fn load(&self) -> Result<WordList, WordleError> {
        match self {
            Self::Embedded => Ok(WordList::embedded().clone()),
            Self::File(path) => loader::load_from_file(path),
        }
    }
}
