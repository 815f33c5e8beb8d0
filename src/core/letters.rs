//! Letter handling for candidates and root words
//!
//! A `LetterPool` holds the letters of a root word that are still available
//! while a candidate is being spelled out of it.

use std::fmt;

/// Normalize raw player input into a candidate
///
/// Lowercases and trims surrounding whitespace. Returns `None` when nothing
/// is left, which callers treat as a silent no-op.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk \n").as_deref(), Some("silk"));
/// assert_eq!(normalize("   "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let normalized = raw.to_lowercase();
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The letters of a root word still available to draw from
///
/// Every letter of the root can be drawn at most once. Drawing removes the
/// first remaining occurrence, scanning left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Create a pool holding every letter of `root`, lowercased
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            letters: root.to_lowercase().chars().collect(),
        }
    }

    /// Remove one occurrence of `letter` from the pool
    ///
    /// Returns `false` if no occurrence is left.
    pub fn take(&mut self, letter: char) -> bool {
        if let Some(position) = self.letters.iter().position(|&c| c == letter) {
            self.letters.remove(position);
            true
        } else {
            false
        }
    }

    /// Check whether every letter of `word` can be drawn from this pool
    ///
    /// Works on a copy; the pool itself is left untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("silk"));
    /// assert!(!pool.can_spell("ss"));
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }

    /// Number of letters left in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check if every letter has been drawn
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
