//! Root word analysis command
//!
//! Lists every dictionary word a fresh round on a root word would accept.

use crate::dictionary::WordListDictionary;
use crate::game::{Analysis, achievable_words};

/// Analyze `root_word` against every word in `dictionary`
#[must_use]
pub fn analyze_root(root_word: &str, dictionary: &WordListDictionary) -> Analysis {
    let candidates: Vec<&str> = dictionary.words().collect();
    achievable_words(root_word, &candidates, dictionary, dictionary.language())
}
