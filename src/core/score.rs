//! Length-based word scoring

/// Shortest word that can be accepted or scored
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word that still earns points
pub const MAX_SCORED_LENGTH: usize = 8;

/// Points for a word of `length` characters
///
/// Lengths 3 through 8 earn 1 through 6 points; anything else earns nothing.
///
/// # Examples
/// ```
/// use word_scramble::core::score;
///
/// assert_eq!(score(4), 2);
/// assert_eq!(score(8), 6);
/// assert_eq!(score(9), 0);
/// ```
#[inline]
#[must_use]
pub fn score(length: usize) -> u32 {
    if (MIN_WORD_LENGTH..=MAX_SCORED_LENGTH).contains(&length) {
        (length - 2) as u32
    } else {
        0
    }
}

/// Sum of the scores of all `words`, measured in characters
#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words
        .iter()
        .map(|word| score(word.as_ref().chars().count()))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_table() {
        assert_eq!(score(3), 1);
        assert_eq!(score(4), 2);
        assert_eq!(score(5), 3);
        assert_eq!(score(6), 4);
        assert_eq!(score(7), 5);
        assert_eq!(score(8), 6);
    }

    #[test]
    fn score_outside_range_is_zero() {
        for length in [0, 1, 2, 9, 10, 100] {
            assert_eq!(score(length), 0, "length {length} should score 0");
        }
    }

    #[test]
    fn total_score_sums_lengths() {
        let words = ["silk", "worm", "milk", "owl"];
        // 2 + 2 + 2 + 1
        assert_eq!(total_score(&words), 7);
    }

    #[test]
    fn total_score_empty() {
        let words: [String; 0] = [];
        assert_eq!(total_score(&words), 0);
    }

    #[test]
    fn total_score_counts_chars_not_bytes() {
        // 4 characters, 5 bytes
        let words = ["café"];
        assert_eq!(total_score(&words), 2);
    }
}
