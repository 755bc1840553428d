//! Vocabulary for secret words
//!
//! Provides the embedded word list compiled into the binary, plus loading of
//! custom lists.

mod embedded;
pub mod loader;

pub use embedded::{VOCABULARY, VOCABULARY_COUNT};

use crate::core::Word;
use std::path::Path;

/// Where to take the vocabulary from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    Embedded,
    File(String),
}

impl WordlistSource {
    /// Interpret a command-line value: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("embedded") {
            Self::Embedded
        } else {
            Self::File(arg.to_string())
        }
    }

    /// Load the words this source refers to
    ///
    /// # Errors
    ///
    /// Returns an error if a word file cannot be read.
    pub fn load(&self) -> std::io::Result<Vec<Word>> {
        match self {
            Self::Embedded => Ok(loader::words_from_slice(VOCABULARY)),
            Self::File(path) => loader::load_from_file(Path::new(path)),
        }
    }
}
