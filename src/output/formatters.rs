//! Formatting utilities for terminal output

use crate::game::Rejection;

/// Circled-number badge for a word's length, e.g. `④` for "silk"
///
/// Lengths past 20 have no circled glyph and fall back to `(n)`.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let length = word.chars().count();
    match u32::try_from(length) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({n})"), String::from)
        }
        _ => format!("({length})"),
    }
}

/// One-line alert text for a rejection: "Title: message"
#[must_use]
pub fn rejection_line(rejection: Rejection) -> String {
    format!("{}: {}", rejection.title(), rejection.message())
}

/// "1 point" / "3 points"
#[must_use]
pub fn points(score: u32) -> String {
    if score == 1 {
        "1 point".to_string()
    } else {
        format!("{score} points")
    }
}
