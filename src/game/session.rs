//! A play session: the current round plus running statistics
//!
//! Frontends hold one `Session` and forward player input to it.

use super::round::{Round, new_round};
use super::validator::{Accepted, Rejection};
use crate::dictionary::Dictionary;
use rand::Rng;

/// Statistics across the rounds of a session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    /// Rounds started, including the one in progress
    pub rounds_played: usize,
    /// Words accepted over all rounds
    pub words_accepted: usize,
    /// Highest round score reached so far
    pub best_score: u32,
}

/// Current round, start words and statistics for one player
pub struct Session<R: Rng> {
    start_words: Vec<String>,
    rng: R,
    round: Round,
    stats: Statistics,
}

impl<R: Rng> Session<R> {
    /// Start a session and its first round
    pub fn new(start_words: Vec<String>, mut rng: R) -> Self {
        let round = new_round(&start_words, &mut rng);

        Self {
            start_words,
            rng,
            round,
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
        }
    }

    /// The round in progress
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Statistics for the whole session
    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Submit a candidate to the current round
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] reason if the round does not accept the candidate.
    pub fn submit<D: Dictionary + ?Sized>(
        &mut self,
        candidate_raw: &str,
        dictionary: &D,
        language: &str,
    ) -> Result<Accepted, Rejection> {
        let accepted = self.round.submit(candidate_raw, dictionary, language)?;

        self.stats.words_accepted += 1;
        self.stats.best_score = self.stats.best_score.max(self.round.score());

        Ok(accepted)
    }

    /// Abandon the current round and start a fresh one
    pub fn new_round(&mut self) -> &Round {
        self.round = new_round(&self.start_words, &mut self.rng);
        self.stats.rounds_played += 1;
        &self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<StdRng> {
        Session::new(vec!["silkworm".to_string()], StdRng::seed_from_u64(11))
    }

    fn dictionary() -> WordListDictionary {
        WordListDictionary::from_words("en", ["silk", "worm", "worms", "milk"])
    }

    #[test]
    fn first_round_starts_immediately() {
        let session = session();
        assert_eq!(session.round().root_word(), "silkworm");
        assert_eq!(session.stats().rounds_played, 1);
        assert_eq!(session.stats().words_accepted, 0);
    }

    #[test]
    fn accepted_words_update_stats() {
        let dictionary = dictionary();
        let mut session = session();

        session.submit("silk", &dictionary, "en").unwrap();
        session.submit("worms", &dictionary, "en").unwrap();

        assert_eq!(session.stats().words_accepted, 2);
        assert_eq!(session.stats().best_score, 5);
    }

    #[test]
    fn rejected_words_do_not_count() {
        let dictionary = dictionary();
        let mut session = session();

        session.submit("silk", &dictionary, "en").unwrap();
        assert!(session.submit("silk", &dictionary, "en").is_err());
        assert!(session.submit("", &dictionary, "en").is_err());

        assert_eq!(session.stats().words_accepted, 1);
    }

    #[test]
    fn new_round_resets_round_but_keeps_best() {
        let dictionary = dictionary();
        let mut session = session();

        session.submit("worms", &dictionary, "en").unwrap();
        session.new_round();

        assert!(session.round().used_words().is_empty());
        assert_eq!(session.round().score(), 0);
        assert_eq!(session.stats().rounds_played, 2);
        assert_eq!(session.stats().best_score, 3);

        // Words from the previous round are available again
        assert!(session.submit("worms", &dictionary, "en").is_ok());
    }

    #[test]
    fn best_score_is_maximum_over_rounds() {
        let dictionary = dictionary();
        let mut session = session();

        session.submit("worms", &dictionary, "en").unwrap();
        session.submit("milk", &dictionary, "en").unwrap();
        session.new_round();
        session.submit("silk", &dictionary, "en").unwrap();

        assert_eq!(session.stats().best_score, 5);
    }
}
