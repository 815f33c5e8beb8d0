//! Per-round game state
//!
//! A `Round` owns the root word and the accepted words. Validation itself is
//! delegated to the pure [`evaluate`] function.

use super::validator::{Accepted, Rejection, evaluate};
use crate::core::total_score;
use crate::dictionary::Dictionary;
use crate::wordlists::pick_root_word;
use rand::Rng;

/// State of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root_word: String,
    used_words: Vec<String>,
}

impl Round {
    /// Start a round on `root_word` with no accepted words
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        let root_word = root_word.into().trim().to_lowercase();
        tracing::info!(root = %root_word, "new round");

        Self {
            root_word,
            used_words: Vec::new(),
        }
    }

    /// The word every candidate is spelled from
    #[inline]
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Total points earned this round
    #[must_use]
    pub fn score(&self) -> u32 {
        total_score(&self.used_words)
    }

    /// Evaluate a candidate without changing the round
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason if the candidate is not acceptable.
    pub fn evaluate<D: Dictionary + ?Sized>(
        &self,
        candidate_raw: &str,
        dictionary: &D,
        language: &str,
    ) -> Result<Accepted, Rejection> {
        evaluate(
            candidate_raw,
            &self.root_word,
            &self.used_words,
            dictionary,
            language,
        )
    }

    /// Evaluate a candidate and record it if accepted
    ///
    /// Accepted words go to the front of the used list.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason if the candidate is not acceptable; the
    /// round is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::game::Round;
    ///
    /// let dictionary = WordListDictionary::from_words("en", ["silk", "worm"]);
    /// let mut round = Round::new("silkworm");
    ///
    /// round.submit("silk", &dictionary, "en").unwrap();
    /// round.submit("worm", &dictionary, "en").unwrap();
    ///
    /// assert_eq!(round.used_words(), ["worm", "silk"]);
    /// assert_eq!(round.score(), 4);
    /// ```
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate_raw: &str,
        dictionary: &D,
        language: &str,
    ) -> Result<Accepted, Rejection> {
        let accepted = self.evaluate(candidate_raw, dictionary, language)?;
        self.used_words.insert(0, accepted.word.clone());
        Ok(accepted)
    }
}

/// Start a new round on a root word picked at random from `word_list`
///
/// The new round has no accepted words.
pub fn new_round<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> Round {
    Round::new(pick_root_word(word_list, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words("en", ["silk", "worm", "milk", "owl", "slow", "worms"])
    }

    #[test]
    fn new_round_is_empty() {
        let round = Round::new("silkworm");
        assert_eq!(round.root_word(), "silkworm");
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn root_word_is_normalized() {
        let round = Round::new("  SilkWorm\n");
        assert_eq!(round.root_word(), "silkworm");
    }

    #[test]
    fn submit_prepends_accepted_words() {
        let dictionary = dictionary();
        let mut round = Round::new("silkworm");

        round.submit("silk", &dictionary, "en").unwrap();
        round.submit("owl", &dictionary, "en").unwrap();
        round.submit("worms", &dictionary, "en").unwrap();

        assert_eq!(round.used_words(), ["worms", "owl", "silk"]);
        assert_eq!(round.score(), 3 + 1 + 2);
    }

    #[test]
    fn rejected_submission_leaves_round_unchanged() {
        let dictionary = dictionary();
        let mut round = Round::new("silkworm");
        round.submit("silk", &dictionary, "en").unwrap();
        let before = round.clone();

        assert_eq!(
            round.submit("silk", &dictionary, "en"),
            Err(Rejection::AlreadyUsed)
        );
        assert_eq!(
            round.submit("ss", &dictionary, "en"),
            Err(Rejection::NotConstructible)
        );
        assert_eq!(round.submit("", &dictionary, "en"), Err(Rejection::Empty));
        assert_eq!(round, before);
    }

    #[test]
    fn evaluate_does_not_record() {
        let dictionary = dictionary();
        let round = Round::new("silkworm");

        assert!(round.evaluate("silk", &dictionary, "en").is_ok());
        assert!(round.used_words().is_empty());
    }

    #[test]
    fn second_submission_of_same_word_is_duplicate() {
        let dictionary = dictionary();
        let mut round = Round::new("silkworm");

        assert!(round.submit("Milk", &dictionary, "en").is_ok());
        assert_eq!(
            round.submit("milk ", &dictionary, "en"),
            Err(Rejection::AlreadyUsed)
        );
    }

    #[test]
    fn new_round_clears_used_words() {
        let dictionary = dictionary();
        let words = vec!["silkworm".to_string()];
        let mut rng = StdRng::seed_from_u64(3);

        let mut round = new_round(&words, &mut rng);
        round.submit("silk", &dictionary, "en").unwrap();
        assert_eq!(round.score(), 2);

        let round = new_round(&words, &mut rng);
        assert_eq!(round.root_word(), "silkworm");
        assert!(round.used_words().is_empty());
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn new_round_from_empty_list_uses_fallback() {
        let mut rng = StdRng::seed_from_u64(3);
        let round = new_round(&[], &mut rng);
        assert_eq!(round.root_word(), "silkworm");
    }

    #[test]
    fn rounds_are_isolated() {
        let dictionary = dictionary();
        let mut first = Round::new("silkworm");
        let second = Round::new("silkworm");

        first.submit("silk", &dictionary, "en").unwrap();

        assert!(second.evaluate("silk", &dictionary, "en").is_ok());
    }
}
