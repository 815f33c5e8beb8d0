//! Word lists for Word Scramble
//!
//! Provides embedded word lists compiled into the binary, file loading, and
//! root word selection.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY_WORDS, DICTIONARY_WORDS_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordSourceError;
pub use source::{FALLBACK_ROOT_WORD, WordSource, pick_root_word};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY_WORDS.len(), DICTIONARY_WORDS_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_ascii() {
        for &word in START_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_eight_letters() {
        for &word in START_WORDS {
            assert_eq!(word.len(), 8, "Word '{word}' is not 8 letters");
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY_WORDS.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Start word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn common_sub_words_of_start_words_are_accepted() {
        use crate::dictionary::{DEFAULT_LANGUAGE, WordListDictionary};
        use crate::game::evaluate;

        let dictionary =
            WordListDictionary::load(DEFAULT_LANGUAGE, &WordSource::Embedded(DICTIONARY_WORDS))
                .unwrap();

        let cases: &[(&str, &[&str])] = &[
            ("absolute", &["able", "blue", "boats", "lotus", "tabs", "bolts"]),
            ("keyboard", &["bread", "road", "bark", "yoke"]),
            ("mountain", &["nation", "amount", "main", "into"]),
            ("triangle", &["glean", "tingle", "alert", "grin"]),
            ("sunlight", &["lights", "sting", "hunt", "sigh"]),
            ("silkworm", &["silk", "milk", "worms", "owl"]),
        ];

        for &(root, words) in cases {
            assert!(START_WORDS.contains(&root), "'{root}' is not a start word");
            for &word in words {
                assert!(
                    evaluate(word, root, &[], &dictionary, DEFAULT_LANGUAGE).is_ok(),
                    "'{word}' rejected for root '{root}'"
                );
            }
        }
    }

    #[test]
    fn fallback_is_a_start_word() {
        assert!(START_WORDS.contains(&FALLBACK_ROOT_WORD));
    }
}
