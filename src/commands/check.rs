//! One-shot candidate check
//!
//! Evaluates a single candidate against a root word and a list of used words.

use crate::dictionary::Dictionary;
use crate::game::{Accepted, Rejection, evaluate};

/// Configuration for checking a candidate
pub struct CheckConfig {
    pub root_word: String,
    pub candidate: String,
    pub used_words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub fn new(root_word: &str, candidate: &str) -> Self {
        Self {
            root_word: root_word.trim().to_lowercase(),
            candidate: candidate.to_string(),
            used_words: Vec::new(),
        }
    }

    /// Treat `used` as already accepted, most recent first
    ///
    /// Entries are normalized the same way candidates are; blanks are dropped.
    #[must_use]
    pub fn with_used_words<I, S>(mut self, used: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.used_words = used
            .into_iter()
            .filter_map(|word| crate::core::normalize(word.as_ref()))
            .collect();
        self
    }
}

/// Result of checking a candidate
pub struct CheckResult {
    pub root_word: String,
    pub candidate: String,
    pub verdict: Result<Accepted, Rejection>,
}

/// Check one candidate
#[must_use]
pub fn check_word<D: Dictionary + ?Sized>(
    config: CheckConfig,
    dictionary: &D,
    language: &str,
) -> CheckResult {
    let verdict = evaluate(
        &config.candidate,
        &config.root_word,
        &config.used_words,
        dictionary,
        language,
    );

    CheckResult {
        root_word: config.root_word,
        candidate: config.candidate,
        verdict,
    }
}
