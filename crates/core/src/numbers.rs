//! Localized counter-token parsing.
//!
//! Engagement counters in archived footers come as locale-formatted tokens:
//! a comma decimal separator, a non-breaking space as thousands separator,
//! and a trailing `E` (ezer, "thousand") abbreviation for large counts, e.g.
//! `3,1 E` for 3100. This module turns such tokens into integers and knows
//! how to spot them inside a larger text blob.
//!
//! Parsing is best-effort by contract: a token that does not survive
//! normalization yields `None`, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::NBSP;

/// Trailing abbreviation marker meaning "multiply by one thousand".
/// Case-sensitive; a lowercase `e` is not a marker.
pub const THOUSAND_SUFFIX: char = 'E';

/// Pattern matching one counter token: digits with separators, optionally
/// followed by the thousand abbreviation.
pub const NUMBER_TOKEN_PATTERN: &str = r"[\d.,]+\s*E?";

/// Pattern matching an abbreviated counter token (`3,1 E` style).
const ABBREVIATED_PATTERN: &str = r"[\d.,]+\s*E";

/// Pattern matching a bare integer.
const BARE_INT_PATTERN: &str = r"\b\d+\b";

// Compiled once; these run per ancestor per candidate in the climb loops.
static NUMBER_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(NUMBER_TOKEN_PATTERN).unwrap());
static ABBREVIATED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ABBREVIATED_PATTERN).unwrap());
static BARE_INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(BARE_INT_PATTERN).unwrap());

/// Parses one localized counter token into an integer.
///
/// Normalizes non-breaking spaces to regular spaces and comma decimal
/// separators to periods, strips a trailing [`THOUSAND_SUFFIX`] (scaling by
/// 1000), then parses as a float and truncates.
///
/// # Example
///
/// ```rust
/// use excerpo_core::numbers::parse_count;
///
/// assert_eq!(parse_count("3,1 E"), Some(3100));
/// assert_eq!(parse_count("161"), Some(161));
/// assert_eq!(parse_count("tegnap"), None);
/// ```
pub fn parse_count(token: &str) -> Option<i64> {
    let normalized = token.trim().replace(NBSP, " ").replace(',', ".");
    let (digits, scale) = match normalized.strip_suffix(THOUSAND_SUFFIX) {
        Some(rest) => (rest.trim(), 1000.0),
        None => (normalized.as_str(), 1.0),
    };
    digits.parse::<f64>().ok().map(|value| (value * scale) as i64)
}

/// Extracts every counter token from a text blob, in order of appearance.
///
/// Non-breaking spaces are normalized first so that `3,1\u{a0}E` is seen as
/// one abbreviated token.
pub fn counter_tokens(text: &str) -> Vec<String> {
    let normalized = text.replace(NBSP, " ");
    NUMBER_TOKEN_RE
        .find_iter(&normalized)
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Checks whether a text blob contains something that looks like a counter:
/// an abbreviated token or any bare integer.
pub fn has_counter_token(text: &str) -> bool {
    ABBREVIATED_RE.is_match(text) || BARE_INT_RE.is_match(text)
}
