//! Candidate validation and scoring
//!
//! `evaluate` is a pure function of its inputs: the root word and the words
//! already accepted are passed in on every call.

use crate::core::{LetterPool, MIN_WORD_LENGTH, normalize, score};
use crate::dictionary::Dictionary;
use thiserror::Error;

/// A candidate that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word
    pub word: String,
    /// Points earned for it
    pub score: u32,
}

/// Why a candidate was turned down
///
/// Checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    /// Nothing left after trimming
    #[error("candidate is empty")]
    Empty,
    /// Already accepted this round
    #[error("word has already been used")]
    AlreadyUsed,
    /// Needs letters the root word does not have
    #[error("word cannot be made from the root word's letters")]
    NotConstructible,
    /// Shorter than three letters, or the root word itself
    #[error("word is too short or is the root word")]
    TooShortOrIdentical,
    /// Not in the dictionary
    #[error("word is not in the dictionary")]
    NotAWord,
}

impl Rejection {
    /// Whether frontends should drop this rejection without telling the player
    #[must_use]
    pub const fn is_silent(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Short heading for an alert
    ///
    /// Both real-word failures share one heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::AlreadyUsed => "Word used already",
            Self::NotConstructible => "Word not possible",
            Self::TooShortOrIdentical | Self::NotAWord => "Word not recognized",
        }
    }

    /// Body text for an alert
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::AlreadyUsed => "Be more original",
            Self::NotConstructible => "You can't spell that word from the root word",
            Self::TooShortOrIdentical | Self::NotAWord => "Not a real word",
        }
    }
}

/// Check that `word` has not been accepted before
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Check that `word` can be spelled from the letters of `root_word`
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    LetterPool::new(root_word).can_spell(word)
}

/// Check that `word` is a real word other than the root
///
/// # Errors
///
/// Returns [`Rejection::TooShortOrIdentical`] before the dictionary is consulted,
/// or [`Rejection::NotAWord`] if the dictionary does not know the word.
pub fn is_real<D: Dictionary + ?Sized>(
    word: &str,
    root_word: &str,
    dictionary: &D,
    language: &str,
) -> Result<(), Rejection> {
    if word == root_word || word.chars().count() < MIN_WORD_LENGTH {
        return Err(Rejection::TooShortOrIdentical);
    }

    if dictionary.is_known_word(word, language) {
        Ok(())
    } else {
        Err(Rejection::NotAWord)
    }
}

/// Evaluate a raw candidate against the round's root word and used words
///
/// # Errors
///
/// Returns the first [`Rejection`] the candidate runs into.
///
/// # Examples
/// ```
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::game::{Rejection, evaluate};
///
/// let dictionary = WordListDictionary::from_words("en", ["silk", "worm"]);
///
/// let accepted = evaluate("Silk", "silkworm", &[], &dictionary, "en").unwrap();
/// assert_eq!(accepted.word, "silk");
/// assert_eq!(accepted.score, 2);
///
/// let used = vec!["silk".to_string()];
/// assert_eq!(
///     evaluate("silk", "silkworm", &used, &dictionary, "en"),
///     Err(Rejection::AlreadyUsed)
/// );
/// ```
pub fn evaluate<D: Dictionary + ?Sized>(
    candidate_raw: &str,
    root_word: &str,
    used_words: &[String],
    dictionary: &D,
    language: &str,
) -> Result<Accepted, Rejection> {
    let verdict = check(candidate_raw, root_word, used_words, dictionary, language);

    match &verdict {
        Ok(accepted) => {
            tracing::debug!(word = %accepted.word, score = accepted.score, root = root_word, "accepted");
        }
        Err(rejection) => {
            tracing::debug!(candidate = candidate_raw, root = root_word, ?rejection, "rejected");
        }
    }

    verdict
}

fn check<D: Dictionary + ?Sized>(
    candidate_raw: &str,
    root_word: &str,
    used_words: &[String],
    dictionary: &D,
    language: &str,
) -> Result<Accepted, Rejection> {
    let root_word = normalize(root_word).unwrap_or_default();
    let word = normalize(candidate_raw).ok_or(Rejection::Empty)?;

    if !is_original(&word, used_words) {
        return Err(Rejection::AlreadyUsed);
    }

    if !is_possible(&word, &root_word) {
        return Err(Rejection::NotConstructible);
    }

    is_real(&word, &root_word, dictionary, language)?;

    let score = score(word.chars().count());
    Ok(Accepted { word, score })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    const ROOT: &str = "silkworm";

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words(
            "en",
            [
                "silk", "worm", "worms", "milk", "milks", "owl", "slow", "ski", "silkworm", "is",
                "so", "sow",
            ],
        )
    }

    /// Dictionary that knows every word
    struct Permissive;

    impl Dictionary for Permissive {
        fn is_known_word(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    fn used(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    #[test]
    fn accepts_silk() {
        let result = evaluate("silk", ROOT, &[], &dictionary(), "en");
        assert_eq!(
            result,
            Ok(Accepted {
                word: "silk".to_string(),
                score: 2,
            })
        );
    }

    #[test]
    fn normalizes_before_checking() {
        let accepted = evaluate("  MiLk \n", ROOT, &[], &dictionary(), "en").unwrap();
        assert_eq!(accepted.word, "milk");
    }

    #[test]
    fn empty_candidate() {
        for raw in ["", "   ", "\n\t"] {
            assert_eq!(
                evaluate(raw, ROOT, &[], &dictionary(), "en"),
                Err(Rejection::Empty)
            );
        }
    }

    #[test]
    fn already_used() {
        let used = used(&["silk", "worm"]);
        assert_eq!(
            evaluate("silk", ROOT, &used, &dictionary(), "en"),
            Err(Rejection::AlreadyUsed)
        );
        assert_eq!(
            evaluate(" WORM ", ROOT, &used, &dictionary(), "en"),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn already_used_wins_over_later_checks() {
        // "zz" would fail every other check too
        let used = used(&["zz"]);
        assert_eq!(
            evaluate("zz", ROOT, &used, &dictionary(), "en"),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn not_constructible_duplicate_letter() {
        assert_eq!(
            evaluate("ss", ROOT, &[], &dictionary(), "en"),
            Err(Rejection::NotConstructible)
        );
    }

    #[test]
    fn not_constructible_missing_letter() {
        assert_eq!(
            evaluate("silky", ROOT, &[], &Permissive, "en"),
            Err(Rejection::NotConstructible)
        );
    }

    #[test]
    fn not_constructible_wins_over_length() {
        // Too short as well, but letters are checked first
        assert_eq!(
            evaluate("zz", ROOT, &[], &Permissive, "en"),
            Err(Rejection::NotConstructible)
        );
    }

    #[test]
    fn identical_to_root() {
        assert_eq!(
            evaluate("silkworm", ROOT, &[], &dictionary(), "en"),
            Err(Rejection::TooShortOrIdentical)
        );
        assert_eq!(
            evaluate("SilkWorm", ROOT, &[], &Permissive, "en"),
            Err(Rejection::TooShortOrIdentical)
        );
    }

    #[test]
    fn root_word_is_normalized_too() {
        let dictionary = dictionary();
        for root in ["SILKWORM", " SilkWorm ", "silkworm\n"] {
            assert_eq!(
                evaluate("silkworm", root, &[], &dictionary, "en"),
                Err(Rejection::TooShortOrIdentical),
                "root {root:?}"
            );
            assert_eq!(
                evaluate("silk", root, &[], &dictionary, "en"),
                Ok(Accepted {
                    word: "silk".to_string(),
                    score: 2,
                })
            );
        }
    }

    #[test]
    fn too_short_even_if_known() {
        // "is" and "so" are in the dictionary
        assert_eq!(
            evaluate("is", ROOT, &[], &dictionary(), "en"),
            Err(Rejection::TooShortOrIdentical)
        );
        assert_eq!(
            evaluate("so", ROOT, &[], &Permissive, "en"),
            Err(Rejection::TooShortOrIdentical)
        );
        assert_eq!(
            evaluate("s", ROOT, &[], &Permissive, "en"),
            Err(Rejection::TooShortOrIdentical)
        );
    }

    #[test]
    fn not_a_word() {
        assert_eq!(
            evaluate("mlik", ROOT, &[], &dictionary(), "en"),
            Err(Rejection::NotAWord)
        );
    }

    #[test]
    fn wrong_language_is_not_a_word() {
        assert_eq!(
            evaluate("silk", ROOT, &[], &dictionary(), "fr"),
            Err(Rejection::NotAWord)
        );
    }

    #[test]
    fn scores_follow_length() {
        let dictionary = dictionary();
        assert_eq!(evaluate("owl", ROOT, &[], &dictionary, "en").unwrap().score, 1);
        assert_eq!(evaluate("slow", ROOT, &[], &dictionary, "en").unwrap().score, 2);
        assert_eq!(evaluate("worms", ROOT, &[], &dictionary, "en").unwrap().score, 3);
    }

    #[test]
    fn idempotent_for_identical_inputs() {
        let dictionary = dictionary();
        let used = used(&["silk"]);
        for raw in ["silk", "milk", "ss", "silkworm", "mlik", ""] {
            let first = evaluate(raw, ROOT, &used, &dictionary, "en");
            let second = evaluate(raw, ROOT, &used, &dictionary, "en");
            assert_eq!(first, second, "{raw:?} gave different results");
        }
    }

    #[test]
    fn predicates_individually() {
        assert!(is_original("silk", &used(&["worm"])));
        assert!(!is_original("worm", &used(&["worm"])));

        assert!(is_possible("milk", ROOT));
        assert!(!is_possible("wool", ROOT));

        assert_eq!(is_real("silk", ROOT, &dictionary(), "en"), Ok(()));
        assert_eq!(
            is_real("ski", "ski", &Permissive, "en"),
            Err(Rejection::TooShortOrIdentical)
        );
    }

    #[test]
    fn rejection_titles_merge_real_word_failures() {
        assert_eq!(
            Rejection::TooShortOrIdentical.title(),
            Rejection::NotAWord.title()
        );
        assert_ne!(Rejection::AlreadyUsed.title(), Rejection::NotAWord.title());
        assert_ne!(
            Rejection::NotConstructible.title(),
            Rejection::NotAWord.title()
        );
    }

    #[test]
    fn only_empty_is_silent() {
        assert!(Rejection::Empty.is_silent());
        for rejection in [
            Rejection::AlreadyUsed,
            Rejection::NotConstructible,
            Rejection::TooShortOrIdentical,
            Rejection::NotAWord,
        ] {
            assert!(!rejection.is_silent());
            assert!(!rejection.title().is_empty());
            assert!(!rejection.message().is_empty());
        }
    }
}
