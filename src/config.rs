//! Game configuration
//!
//! Collects where word lists come from, the dictionary language and the
//! random seed. The binary builds this from command-line flags.

use crate::dictionary::{DEFAULT_LANGUAGE, WordListDictionary};
use crate::wordlists::{DICTIONARY_WORDS, START_WORDS, WordSource, WordSourceError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Resolved configuration for a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Root word list
    pub start_words: WordSource,
    /// Reference dictionary list
    pub dictionary: WordSource,
    /// Language code passed to the dictionary
    pub language: String,
    /// Fixed seed for root word selection
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: WordSource::Embedded(START_WORDS),
            dictionary: WordSource::Embedded(DICTIONARY_WORDS),
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Build a config from optional overrides; `None` keeps the default
    #[must_use]
    pub fn new(
        start_words: Option<PathBuf>,
        dictionary: Option<PathBuf>,
        language: Option<String>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            start_words: WordSource::from_arg(start_words, START_WORDS),
            dictionary: WordSource::from_arg(dictionary, DICTIONARY_WORDS),
            language: language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            seed,
        }
    }

    /// Load the root word list
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::ResourceUnavailable`] if the list cannot be read.
    pub fn load_start_words(&self) -> Result<Vec<String>, WordSourceError> {
        let words = self.start_words.load()?;
        if words.is_empty() {
            tracing::warn!(source = %self.start_words, "start word list is empty, using fallback root word");
        }
        Ok(words)
    }

    /// Load the reference dictionary for the configured language
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::ResourceUnavailable`] if the list cannot be read.
    pub fn load_dictionary(&self) -> Result<WordListDictionary, WordSourceError> {
        WordListDictionary::load(self.language.clone(), &self.dictionary)
    }

    /// Random number generator for root word selection
    ///
    /// Seeded when a seed is configured, otherwise from the OS.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
