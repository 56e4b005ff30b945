//! JSON export document.
//!
//! The run's output is one JSON document: a `Metadata` header with the post
//! count and the archive's date range, and the `Posts` array of records.
//! The date strings are pass-through configuration describing the capture
//! window of the snapshot set, not computed values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::record::PostRecord;

/// Run metadata for the export header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Number of exported posts.
    pub count: usize,
    /// First capture date of the snapshot set.
    pub start_date: String,
    /// Last capture date of the snapshot set.
    pub end_date: String,
}

/// The complete export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Export {
    #[serde(rename = "Metadata")]
    pub metadata: ExportMetadata,
    #[serde(rename = "Posts")]
    pub posts: Vec<PostRecord>,
}

impl Export {
    /// Builds an export document; `count` is derived from the post list.
    pub fn new(posts: Vec<PostRecord>, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        let metadata = ExportMetadata {
            count: posts.len(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        };
        Self { metadata, posts }
    }

    /// Serializes the export as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes an export document to a file as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`crate::ExcerpoError::Io`] on write failure and
/// [`crate::ExcerpoError::Json`] on serialization failure.
pub fn write_export(path: &Path, export: &Export) -> Result<()> {
    let mut json = export.to_json_string()?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}
