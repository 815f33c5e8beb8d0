//! Core domain types for Word Scramble
//!
//! Pure functions and small value types with no I/O: candidate normalization,
//! the root-letter pool used for the constructibility check, and scoring.

mod letters;
mod score;

pub use letters::{LetterPool, normalize};
pub use score::{MAX_SCORED_LENGTH, MIN_WORD_LENGTH, score, total_score};
