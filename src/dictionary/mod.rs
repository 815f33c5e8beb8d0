//! Reference dictionary for the real-word check
//!
//! The validator only needs a yes/no answer for a word in a language, so the
//! dictionary is a trait. `WordListDictionary` answers it from a word list.

use crate::wordlists::{WordSource, WordSourceError};
use rustc_hash::FxHashSet;

/// Language code used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// A spell-checking capability
pub trait Dictionary {
    /// Check whether `word` is a known word in `language`
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

/// Dictionary backed by an in-memory word set for a single language
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary for `language` from a list of words
    ///
    /// Words are lowercased and trimmed; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words("en", ["silk", "worm"]);
    /// assert!(dictionary.is_known_word("silk", "en"));
    /// assert!(!dictionary.is_known_word("silk", "fr"));
    /// ```
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Load a dictionary for `language` from a word source
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::ResourceUnavailable`] if the source cannot be read.
    pub fn load(language: impl Into<String>, source: &WordSource) -> Result<Self, WordSourceError> {
        let dictionary = Self::from_words(language, source.load()?);
        tracing::info!(
            language = %dictionary.language,
            words = dictionary.len(),
            %source,
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// The language this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}
