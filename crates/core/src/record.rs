//! The extracted post record.

use serde::{Deserialize, Serialize};

use crate::stats::PostStats;

/// One structured post extracted from a snapshot.
///
/// Serializes flat as `{author, text, reactions, comments, shares}` with
/// `null` for unresolved counters. Equality and hashing cover every field;
/// that full-field identity is what the global dedup pass keys on, while
/// `text` alone is the near-duplicate key during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostRecord {
    /// Author name from the post's profile block.
    pub author: String,
    /// Flattened body text.
    pub text: String,
    /// Engagement counters from the post's footer.
    #[serde(flatten)]
    pub stats: PostStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, text: &str, reactions: Option<i64>) -> PostRecord {
        PostRecord {
            author: author.to_string(),
            text: text.to_string(),
            stats: PostStats { reactions, comments: None, shares: None },
        }
    }

    #[test]
    fn test_full_field_equality() {
        assert_eq!(record("A", "t", Some(1)), record("A", "t", Some(1)));
        assert_ne!(record("A", "t", Some(1)), record("A", "t", Some(2)));
        assert_ne!(record("A", "t", Some(1)), record("B", "t", Some(1)));
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(record("Szerző", "szöveg", Some(3100))).unwrap();
        assert_eq!(json["author"], "Szerző");
        assert_eq!(json["text"], "szöveg");
        assert_eq!(json["reactions"], 3100);
        assert_eq!(json["comments"], serde_json::Value::Null);
        assert!(json.get("stats").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let original = record("A", "t", Some(5));
        let json = serde_json::to_string(&original).unwrap();
        let parsed: PostRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
