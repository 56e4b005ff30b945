//! Engagement-counter parsing from footer text blobs.
//!
//! A located footer fragment flattens into something like
//! `Az összes reakció: 3,1 E 161 94 Tetszik Hozzászólás Megosztás`: counter
//! tokens intermixed with labels, with the reaction summary leading and the
//! comment/share counters trailing. [`parse_stats`] recovers the
//! `{reactions, comments, shares}` triple from such a blob using positional
//! heuristics anchored from both ends.

use serde::{Deserialize, Serialize};

use crate::numbers::{counter_tokens, parse_count};

/// Engagement counters for one post.
///
/// A pure value type: constructed whole by [`parse_stats`], never partially
/// mutated. Unresolved counters are `None` and serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PostStats {
    /// Total reaction count.
    pub reactions: Option<i64>,
    /// Comment count.
    pub comments: Option<i64>,
    /// Share count.
    pub shares: Option<i64>,
}

/// Parses engagement counters out of a footer text blob.
///
/// The footer layout is consistently `[reactions] ... [comments] [shares]`,
/// but the leading summary segment can inject extra numbers (an abbreviated
/// total, say) before the trailing two counters, so comments and shares are
/// anchored from the right:
///
/// 1. extract counter tokens left to right, dropping unparseable ones;
/// 2. if the first two values are equal, drop the second (the total-reactions
///    summary often repeats the first visible counter);
/// 3. reactions is the first value, unconditionally;
/// 4. with three or more values, comments and shares are the last two; with
///    exactly two, the second is shares; with one, both stay unresolved.
///
/// Step 2 is a known heuristic edge case: a post that legitimately has equal
/// reaction and comment counts, with only those two numbers present, loses
/// its comment count.
pub fn parse_stats(text: &str) -> PostStats {
    let mut values: Vec<i64> = counter_tokens(text)
        .iter()
        .filter_map(|token| parse_count(token))
        .collect();

    if values.is_empty() {
        return PostStats::default();
    }

    if values.len() >= 2 && values[0] == values[1] {
        values.remove(1);
    }

    let reactions = Some(values[0]);
    let (comments, shares) = if values.len() >= 3 {
        (Some(values[values.len() - 2]), Some(values[values.len() - 1]))
    } else if values.len() == 2 {
        (None, Some(values[1]))
    } else {
        (None, None)
    };

    PostStats { reactions, comments, shares }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_footer_blob() {
        let stats = parse_stats("Az összes reakció: 3,1 E 161 94 Tetszik Hozzászólás Megosztás");
        assert_eq!(
            stats,
            PostStats { reactions: Some(3100), comments: Some(161), shares: Some(94) }
        );
    }

    #[test]
    fn test_single_number() {
        let stats = parse_stats("12 Tetszik");
        assert_eq!(stats, PostStats { reactions: Some(12), comments: None, shares: None });
    }

    #[test]
    fn test_two_numbers() {
        let stats = parse_stats("5 7");
        assert_eq!(stats, PostStats { reactions: Some(5), comments: None, shares: Some(7) });
    }

    #[test]
    fn test_empty_blob() {
        assert_eq!(parse_stats(""), PostStats::default());
        assert_eq!(parse_stats("Tetszik Hozzászólás Megosztás"), PostStats::default());
    }

    // Pins the summary-repeat collapse, including its known misfire on a
    // legitimately equal reaction/comment pair.
    #[test]
    fn test_adjacent_equal_collapse() {
        let stats = parse_stats("44 44 12 9");
        assert_eq!(
            stats,
            PostStats { reactions: Some(44), comments: Some(12), shares: Some(9) }
        );

        let stats = parse_stats("44 44 9");
        assert_eq!(stats, PostStats { reactions: Some(44), comments: None, shares: Some(9) });
    }

    #[test]
    fn test_collapse_only_fires_on_first_pair() {
        let stats = parse_stats("3 7 7");
        assert_eq!(stats, PostStats { reactions: Some(3), comments: Some(7), shares: Some(7) });
    }

    #[test]
    fn test_unparseable_tokens_dropped() {
        // ",," matches the token pattern but parses to nothing.
        let stats = parse_stats(",, 5 7");
        assert_eq!(stats, PostStats { reactions: Some(5), comments: None, shares: Some(7) });
    }

    #[test]
    fn test_abbreviated_equal_collapse() {
        // "3,1 E" and "3100" parse to the same value; the repeat collapses.
        let stats = parse_stats("3,1 E 3100 42");
        assert_eq!(stats, PostStats { reactions: Some(3100), comments: None, shares: Some(42) });
    }

    #[test]
    fn test_serializes_null_for_unresolved() {
        let stats = PostStats { reactions: Some(12), comments: None, shares: None };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"reactions":12,"comments":null,"shares":null}"#);
    }
}
