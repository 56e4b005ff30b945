//! Error types for Excerpo operations.
//!
//! This module defines the main error type [`ExcerpoError`] which represents
//! the failures that can abort a snapshot-harvesting run: unreadable input
//! files, malformed selectors, and serialization problems.
//!
//! Heuristic misses inside a document (no post root, no author block, an
//! unparseable counter token) are deliberately *not* errors. Those are
//! normal, high-frequency outcomes on noisy archived markup and are modeled
//! as `Option`/skip throughout the pipeline.
//!
//! # Example
//!
//! ```rust
//! use excerpo_core::{ExcerpoError, Result};
//!
//! fn load_snapshot(html: &str) -> Result<String> {
//!     if html.is_empty() {
//!         return Err(ExcerpoError::HtmlParseError("empty document".into()));
//!     }
//!     // ... parsing logic
//!     # Ok(String::new())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for snapshot extraction operations.
///
/// This enum covers the document-level failure class: a file or directory
/// that cannot be read, markup or selectors that cannot be parsed, and
/// export serialization failures. Anything recoverable per-post is handled
/// with `Option` instead.
#[derive(Error, Debug)]
pub enum ExcerpoError {
    /// HTML or CSS selector parsing errors.
    ///
    /// Returned when a configured marker selector is invalid, which makes
    /// the whole extraction run meaningless rather than a single post.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Snapshot file or directory not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File read/write errors.
    ///
    /// Wraps standard I/O errors for snapshot reads and export writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export serialization errors from serde_json.
    #[error("Failed to serialize export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ExcerpoError.
///
/// This is a convenience alias for `std::result::Result<T, ExcerpoError>`.
pub type Result<T> = std::result::Result<T, ExcerpoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExcerpoError::HtmlParseError("bad selector".to_string());
        assert!(err.to_string().contains("Failed to parse HTML"));
    }

    #[test]
    fn test_file_not_found_display() {
        let err = ExcerpoError::FileNotFound(PathBuf::from("/missing/snapshots"));
        assert!(err.to_string().contains("/missing/snapshots"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExcerpoError = io.into();
        assert!(matches!(err, ExcerpoError::Io(_)));
    }
}
