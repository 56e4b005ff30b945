//! Marker vocabulary for locating posts inside snapshot markup.
//!
//! Archived feed pages carry no stable schema; the only reliable anchors are
//! a pair of semantic attributes and the locale-specific button labels in
//! each post's footer. [`MarkerSet`] gathers that vocabulary in one place so
//! the locator heuristics stay generic string/selector matching, with the
//! actual words swappable per locale or platform revision.

use scraper::Selector;

use crate::Result;
use crate::parse::parse_selector;

/// The marker vocabulary the locators consume.
///
/// `Default` is the Hungarian Facebook snapshot vocabulary the reference
/// archive was captured with.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    /// Selector for nodes carrying a post's body text.
    pub body_selector: String,
    /// Selector for the author-name block inside a post.
    pub author_selector: String,
    /// Exact label of the "Like" footer button.
    pub like_label: String,
    /// Exact label of the "Comment" footer button.
    pub comment_label: String,
    /// Exact label of the "Share" footer button.
    pub share_label: String,
    /// Prefix of the "total reactions" summary label, matched as a substring.
    pub reactions_prefix: String,
    /// Suffixes marking a structurally truncated ("see more") body capture.
    pub truncation_suffixes: Vec<String>,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            body_selector: r#"[data-ad-preview="message"]"#.to_string(),
            author_selector: r#"div[data-ad-rendering-role="profile_name"]"#.to_string(),
            like_label: "Tetszik".to_string(),
            comment_label: "Hozzászólás".to_string(),
            share_label: "Megosztás".to_string(),
            reactions_prefix: "Az összes reakció:".to_string(),
            truncation_suffixes: vec!["Továbbiak".to_string(), "Továbbiak…".to_string()],
        }
    }
}

impl MarkerSet {
    /// The three footer button labels, in footer order.
    pub fn button_labels(&self) -> [&str; 3] {
        [&self.like_label, &self.comment_label, &self.share_label]
    }

    /// Parses the body-text selector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExcerpoError::HtmlParseError`] if the configured
    /// selector is invalid.
    pub fn body(&self) -> Result<Selector> {
        parse_selector(&self.body_selector)
    }

    /// Parses the author-block selector.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExcerpoError::HtmlParseError`] if the configured
    /// selector is invalid.
    pub fn author(&self) -> Result<Selector> {
        parse_selector(&self.author_selector)
    }

    /// Checks whether a body text ends in one of the truncation suffixes.
    pub fn is_truncated(&self, text: &str) -> bool {
        self.truncation_suffixes.iter().any(|suffix| text.ends_with(suffix))
    }
}
