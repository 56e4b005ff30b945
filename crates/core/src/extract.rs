//! Per-document post extraction.
//!
//! For one parsed snapshot: enumerate the body-text marker nodes in DOM
//! order, scope each to a post root, and pull out the author, body text, and
//! footer counters. Extraction is best-effort per candidate: a node that
//! cannot be scoped, has no author block, or carries an empty/truncated body
//! is skipped silently and the document keeps yielding. The only error path
//! is a configured selector that does not parse.

use crate::locate::{FOOTER_CLIMB_LIMIT, POST_CLIMB_LIMIT, find_post_root, locate_stats_fragment};
use crate::markers::MarkerSet;
use crate::parse::Document;
use crate::record::PostRecord;
use crate::stats::parse_stats;
use crate::Result;

/// Configuration for post extraction.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Marker vocabulary to locate posts with.
    pub markers: MarkerSet,
    /// Ancestor ceiling for post-root resolution.
    pub post_climb_limit: usize,
    /// Ancestor ceiling for footer-fragment resolution.
    pub footer_climb_limit: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            markers: MarkerSet::default(),
            post_climb_limit: POST_CLIMB_LIMIT,
            footer_climb_limit: FOOTER_CLIMB_LIMIT,
        }
    }
}

/// Extracts every post record from a document, in DOM order.
///
/// # Errors
///
/// Returns [`crate::ExcerpoError::HtmlParseError`] if a configured marker
/// selector is invalid. Per-candidate misses are not errors.
pub fn extract_posts(doc: &Document, config: &ExtractConfig) -> Result<Vec<PostRecord>> {
    let author_selector = config.markers.author()?;
    let mut posts = Vec::new();

    for body in doc.select(&config.markers.body_selector)? {
        let Some(root) = find_post_root(
            body,
            &author_selector,
            &config.markers.like_label,
            config.post_climb_limit,
        ) else {
            continue;
        };

        let Some(author_block) = root.select_one(&author_selector) else {
            continue;
        };
        let author = author_block.flat_text();

        let text = body.flat_text();
        if text.is_empty() || config.markers.is_truncated(&text) {
            continue;
        }

        let fragment = locate_stats_fragment(root, &config.markers, config.footer_climb_limit);
        let stats = parse_stats(&fragment);

        posts.push(PostRecord { author, text, stats });
    }

    Ok(posts)
}
