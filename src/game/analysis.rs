//! Achievable-word analysis
//!
//! Scans a candidate pool for every word a fresh round on a root word would
//! accept.

use super::validator::evaluate;
use crate::dictionary::Dictionary;
use rayon::prelude::*;

/// A word that a fresh round would accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievable {
    pub word: String,
    pub score: u32,
}

/// Every achievable word for a root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub root_word: String,
    /// Highest score first, then alphabetical
    pub words: Vec<Achievable>,
    /// Score for finding every achievable word
    pub max_score: u32,
}

impl Analysis {
    /// Number of achievable words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if nothing can be made from the root word
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Find every word in `candidates` that a fresh round on `root_word` accepts
///
/// Duplicates in `candidates` are counted once.
///
/// # Examples
/// ```
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::game::achievable_words;
///
/// let words = ["silk", "worm", "wool", "silkworm"];
/// let dictionary = WordListDictionary::from_words("en", words);
///
/// let analysis = achievable_words("silkworm", &words, &dictionary, "en");
/// assert_eq!(analysis.len(), 2);
/// assert_eq!(analysis.max_score, 4);
/// ```
pub fn achievable_words<S, D>(
    root_word: &str,
    candidates: &[S],
    dictionary: &D,
    language: &str,
) -> Analysis
where
    S: AsRef<str> + Sync,
    D: Dictionary + Sync + ?Sized,
{
    let root_word = root_word.trim().to_lowercase();

    let mut words: Vec<Achievable> = candidates
        .par_iter()
        .filter_map(|candidate| {
            evaluate(candidate.as_ref(), &root_word, &[], dictionary, language)
                .ok()
                .map(|accepted| Achievable {
                    word: accepted.word,
                    score: accepted.score,
                })
        })
        .collect();

    words.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    words.dedup_by(|a, b| a.word == b.word);

    let max_score = words.iter().map(|w| w.score).sum();

    tracing::debug!(root = %root_word, achievable = words.len(), max_score, "analysis complete");

    Analysis {
        root_word,
        words,
        max_score,
    }
}
