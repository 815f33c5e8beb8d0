//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised when a word list cannot be obtained
#[derive(Debug, Error)]
pub enum WordSourceError {
    /// The backing resource could not be located or read
    #[error("word list unavailable at {}: {source}", path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a newline-separated file
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`WordSourceError::ResourceUnavailable`] if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordSourceError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|source| WordSourceError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let words = parse_word_list(&content);
    tracing::info!(path = %path.display(), count = words.len(), "loaded word list from file");

    Ok(words)
}

/// Split newline-separated text into normalized words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
