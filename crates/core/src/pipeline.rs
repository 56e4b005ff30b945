//! Run orchestration over a directory of snapshot files.
//!
//! The recency filter is stateful and order-sensitive, so the pipeline feeds
//! it one fixed, deterministic order: snapshot files in lexicographic
//! filename order, posts within a file in DOM order. Per-document extraction
//! itself holds no shared state; only the filtering stage must stay a single
//! ordered consumer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dedup::{DEFAULT_WINDOW_CAPACITY, RecencyWindow, dedup_exact};
use crate::extract::{ExtractConfig, extract_posts};
use crate::parse::Document;
use crate::record::PostRecord;
use crate::{ExcerpoError, Result};

/// Configuration for a full harvesting run.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Capacity of the recency dedup window.
    pub window_capacity: usize,
    /// Per-document extraction configuration.
    pub extract: ExtractConfig,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self { window_capacity: DEFAULT_WINDOW_CAPACITY, extract: ExtractConfig::default() }
    }
}

/// Lists the snapshot files of a directory in lexicographic filename order.
///
/// Only entries whose name ends in `.html` participate in a run.
///
/// # Errors
///
/// Returns [`ExcerpoError::FileNotFound`] when the directory does not exist
/// and [`ExcerpoError::Io`] when it cannot be read.
pub fn snapshot_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExcerpoError::FileNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_html = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".html"));
        if is_html && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Reads, parses, and extracts one snapshot file.
///
/// # Errors
///
/// An unreadable file is a document-level failure and surfaces as an error;
/// a malformed one simply yields fewer or zero posts.
pub fn harvest_file(path: &Path, config: &ExtractConfig) -> Result<Vec<PostRecord>> {
    if !path.is_file() {
        return Err(ExcerpoError::FileNotFound(path.to_path_buf()));
    }
    let html = fs::read_to_string(path)?;
    let doc = Document::parse(&html)?;
    extract_posts(&doc, config)
}

/// Harvests a whole snapshot directory: fixed-order extraction, recency
/// filtering, and the final global exact-duplicate pass.
pub fn harvest_directory(dir: &Path, config: &HarvestConfig) -> Result<Vec<PostRecord>> {
    let mut window = RecencyWindow::new(config.window_capacity);
    let mut accumulated = Vec::new();

    for path in snapshot_files(dir)? {
        for post in harvest_file(&path, &config.extract)? {
            accept_post(post, &mut window, &mut accumulated);
        }
    }

    Ok(dedup_exact(accumulated))
}

/// Runs one record through the recency filter, appending it to the
/// accumulator unless its text was seen within the window.
pub fn accept_post(post: PostRecord, window: &mut RecencyWindow, accumulated: &mut Vec<PostRecord>) {
    if window.contains(&post.text) {
        return;
    }
    window.touch(&post.text);
    accumulated.push(post);
}
