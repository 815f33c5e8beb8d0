//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Candidates must be new this round, spellable from the root word's letters,
//! and real dictionary words of at least three letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::{Rejection, Round};
//!
//! let dictionary = WordListDictionary::from_words("en", ["silk", "worm"]);
//! let mut round = Round::new("silkworm");
//!
//! let accepted = round.submit("silk", &dictionary, "en").unwrap();
//! assert_eq!(accepted.score, 2);
//!
//! assert_eq!(round.submit("ss", &dictionary, "en"), Err(Rejection::NotConstructible));
//! ```

// Core domain types
pub mod core;

// Validation, scoring, rounds
pub mod game;

// Spell-check capability
pub mod dictionary;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
