//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! snapshot HTML and walking the tree: CSS selection, upward (parent)
//! traversal, and text-node search. The underlying parser is treated as a
//! black box; everything the extraction pipeline needs from it lives behind
//! these two types.
//!
//! # Example
//!
//! ```rust
//! use excerpo_core::parse::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <div data-ad-preview="message">Post body</div>
//!         </body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html).unwrap();
//! let bodies = doc.select(r#"[data-ad-preview="message"]"#).unwrap();
//! assert_eq!(bodies[0].flat_text(), "Post body");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{ExcerpoError, Result};

/// Non-breaking space, which archived markup uses as a thousands separator
/// inside counter tokens. Normalized away by [`Element::flat_text`].
pub const NBSP: char = '\u{a0}';

/// Represents a parsed snapshot document.
///
/// A Document wraps one HTML page and provides methods for querying elements
/// using CSS selectors. Documents are read-only to the pipeline; one document
/// contributes zero or more post records.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// The parser is lenient in the html5ever tradition: malformed markup
    /// yields a best-effort tree rather than an error. A malformed snapshot
    /// therefore simply produces fewer (or zero) posts downstream.
    pub fn parse(html: &str) -> Result<Self> {
        let html = Html::parse_document(html);
        Ok(Self { html })
    }

    /// Gets the root element of the document.
    pub fn root(&self) -> Element<'_> {
        Element { element: self.html.root_element() }
    }

    /// Selects elements using a CSS selector string.
    ///
    /// Results are in document (DOM) order, which the extractor relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ExcerpoError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }
}

/// Parses a CSS selector, mapping failures into [`ExcerpoError`].
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ExcerpoError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// A wrapper around scraper's ElementRef for tree navigation.
///
/// Element represents a single element node and provides the traversal the
/// boundary-location heuristics need: downward CSS selection, upward parent
/// hops, and searching the subtree for text nodes by content.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the tag name of this element.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Gets the value of an attribute, or `None` if absent.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Gets the nearest ancestor element, skipping non-element tree nodes.
    ///
    /// Returns `None` at the top of the tree.
    pub fn parent(&self) -> Option<Element<'a>> {
        let mut node = self.element.parent()?;
        loop {
            if let Some(el) = ElementRef::wrap(node) {
                return Some(Element { element: el });
            }
            node = node.parent()?;
        }
    }

    /// Gets the flattened, normalized text of this element's subtree.
    ///
    /// Each text node is trimmed, empty pieces are dropped, and the rest are
    /// joined with single spaces; non-breaking spaces are replaced with
    /// regular spaces. This is the text form every downstream heuristic
    /// (truncation check, label counting, counter tokenizing) operates on.
    pub fn flat_text(&self) -> String {
        let pieces: Vec<&str> = self
            .element
            .text()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect();
        pieces.join(" ").replace(NBSP, " ")
    }

    /// Selects descendant elements using a CSS selector string.
    ///
    /// # Errors
    ///
    /// Returns [`ExcerpoError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'a>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the first descendant matching a pre-parsed selector.
    pub fn select_one(&self, selector: &Selector) -> Option<Element<'a>> {
        self.element.select(selector).next().map(|el| Element { element: el })
    }

    /// Checks whether any descendant matches a pre-parsed selector.
    pub fn has_match(&self, selector: &Selector) -> bool {
        self.element.select(selector).next().is_some()
    }

    /// Finds parents of text nodes in this subtree whose trimmed content
    /// equals `label`, in document order.
    pub fn find_text_exact(&self, label: &str) -> Vec<Element<'a>> {
        self.find_text_nodes(|text| text.trim() == label)
    }

    /// Finds parents of text nodes in this subtree containing `needle` as a
    /// substring, in document order.
    pub fn find_text_containing(&self, needle: &str) -> Vec<Element<'a>> {
        self.find_text_nodes(|text| text.contains(needle))
    }

    /// Checks whether the subtree has a text node exactly matching `label`.
    pub fn has_text_exact(&self, label: &str) -> bool {
        !self.find_text_exact(label).is_empty()
    }

    fn find_text_nodes(&self, matches: impl Fn(&str) -> bool) -> Vec<Element<'a>> {
        let mut hits = Vec::new();
        for node in self.element.descendants() {
            if let Some(text) = node.value().as_text() {
                let text: &str = text;
                if matches(text) {
                    if let Some(parent) = node.parent().and_then(ElementRef::wrap) {
                        hits.push(Element { element: parent });
                    }
                }
            }
        }
        hits
    }
}
