//! Root word selection
//!
//! A `WordSource` says where a word list comes from; `pick_root_word` draws
//! the root word for a round from a loaded list.

use super::loader::{WordSourceError, load_from_file, words_from_slice};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::path::PathBuf;

/// Root word used when the start list has no entries
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Where a word list is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// A list compiled into the binary
    Embedded(&'static [&'static str]),
    /// A newline-separated file on disk
    File(PathBuf),
}

impl WordSource {
    /// Resolve a command-line value: `None` keeps the embedded list
    #[must_use]
    pub fn from_arg(path: Option<PathBuf>, embedded: &'static [&'static str]) -> Self {
        path.map_or(Self::Embedded(embedded), Self::File)
    }

    /// Load the words
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::ResourceUnavailable`] if a file source cannot be read.
    pub fn load(&self) -> Result<Vec<String>, WordSourceError> {
        match self {
            Self::Embedded(words) => {
                tracing::debug!(count = words.len(), "using embedded word list");
                Ok(words_from_slice(words))
            }
            Self::File(path) => load_from_file(path),
        }
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded(words) => write!(f, "embedded ({} words)", words.len()),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Pick a root word uniformly at random
///
/// Falls back to [`FALLBACK_ROOT_WORD`] when `words` is empty.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::pick_root_word;
///
/// let words = vec!["keyboard".to_string()];
/// assert_eq!(pick_root_word(&words, &mut rand::rng()), "keyboard");
/// assert_eq!(pick_root_word(&[], &mut rand::rng()), "silkworm");
/// ```
pub fn pick_root_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    words
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_ROOT_WORD.to_string())
}
