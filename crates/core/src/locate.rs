//! Bounded upward tree search for post boundaries and footer fragments.
//!
//! Snapshot markup nests posts arbitrarily deep in anonymous wrappers, so
//! the only way to establish a post's structural scope is to start from a
//! node known to be inside it and climb until an ancestor satisfies a
//! scoring predicate. [`climb_until`] is that search; the two locators are
//! its instantiations with the marker vocabulary from
//! [`MarkerSet`](crate::markers::MarkerSet).

use scraper::Selector;

use crate::markers::MarkerSet;
use crate::numbers::has_counter_token;
use crate::parse::Element;

/// Default ancestor ceiling when resolving a post root.
pub const POST_CLIMB_LIMIT: usize = 30;

/// Default ancestor ceiling when resolving a footer fragment.
pub const FOOTER_CLIMB_LIMIT: usize = 12;

/// Climbs from `start` through at most `max_up` ancestors (the start node
/// included), returning the first node accepted by the predicate.
///
/// Returns `None` when the ceiling is exhausted or the tree runs out first.
pub fn climb_until<'a>(
    start: Element<'a>, max_up: usize, accept: impl Fn(&Element<'a>) -> bool,
) -> Option<Element<'a>> {
    let mut node = Some(start);
    for _ in 0..max_up {
        let el = node?;
        if accept(&el) {
            return Some(el);
        }
        node = el.parent();
    }
    None
}

/// Resolves the post root for a body-text node.
///
/// Pass 1 (strict): the smallest ancestor whose subtree contains both the
/// author block and an exact Like-label text node. Pass 2 (fallback, only
/// when the strict pass exhausts the ceiling): the smallest ancestor with
/// just the author block. `None` means the candidate cannot be scoped to a
/// post and the caller skips it without error.
pub fn find_post_root<'a>(
    body: Element<'a>, author: &Selector, like_label: &str, max_up: usize,
) -> Option<Element<'a>> {
    climb_until(body, max_up, |el| el.has_match(author) && el.has_text_exact(like_label))
        .or_else(|| climb_until(body, max_up, |el| el.has_match(author)))
}

/// Resolves the footer fragment of a post root and returns its flattened,
/// normalized text.
///
/// Anchors on the first text node matching a button label (exact) or the
/// total-reactions prefix (substring), then climbs up to `max_up` levels
/// looking for the smallest ancestor whose text carries at least two
/// distinct button labels alongside a counter token. When no label node
/// exists at all the result is an empty string; when the climb exhausts the
/// ceiling the anchor's own text is the fallback.
pub fn locate_stats_fragment(root: Element<'_>, markers: &MarkerSet, max_up: usize) -> String {
    let mut anchor = None;
    for label in markers.button_labels() {
        if let Some(hit) = root.find_text_exact(label).into_iter().next() {
            anchor = Some(hit);
            break;
        }
    }
    if anchor.is_none() {
        anchor = root
            .find_text_containing(&markers.reactions_prefix)
            .into_iter()
            .next();
    }
    let Some(anchor) = anchor else {
        return String::new();
    };

    let chosen = climb_until(anchor, max_up, |el| {
        let text = el.flat_text();
        let label_hits = markers
            .button_labels()
            .iter()
            .filter(|label| text.contains(*label))
            .count();
        label_hits >= 2 && has_counter_token(&text)
    });

    chosen.unwrap_or(anchor).flat_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;

    const POST_HTML: &str = r#"
        <html><body>
            <div id="feed">
                <div id="post">
                    <div data-ad-rendering-role="profile_name">Kiskunsági Nemzeti Park</div>
                    <div class="wrapper">
                        <div data-ad-preview="message">A poszt teljes szövege.</div>
                    </div>
                    <div id="footer">
                        <span>Az összes reakció: 3,1&#160;E</span>
                        <span>161</span>
                        <span>94</span>
                        <span>Tetszik</span>
                        <span>Hozzászólás</span>
                        <span>Megosztás</span>
                    </div>
                </div>
            </div>
        </body></html>
    "#;

    fn body_node(doc: &Document) -> Element<'_> {
        doc.select(r#"[data-ad-preview="message"]"#).unwrap()[0]
    }

    #[test]
    fn test_climb_until_respects_ceiling() {
        let doc = Document::parse(POST_HTML).unwrap();
        let body = body_node(&doc);

        // The feed container is 3 hops above the body node.
        let found = climb_until(body, 10, |el| el.attr("id") == Some("feed"));
        assert!(found.is_some());
        let missed = climb_until(body, 3, |el| el.attr("id") == Some("feed"));
        assert!(missed.is_none());
    }

    #[test]
    fn test_climb_until_accepts_start() {
        let doc = Document::parse(POST_HTML).unwrap();
        let body = body_node(&doc);
        let found = climb_until(body, 1, |el| el.attr("data-ad-preview").is_some());
        assert!(found.is_some());
    }

    #[test]
    fn test_find_post_root_strict() {
        let doc = Document::parse(POST_HTML).unwrap();
        let markers = MarkerSet::default();
        let author = markers.author().unwrap();

        let root = find_post_root(body_node(&doc), &author, &markers.like_label, POST_CLIMB_LIMIT).unwrap();
        assert_eq!(root.attr("id"), Some("post"));
    }

    #[test]
    fn test_find_post_root_fallback_without_like_button() {
        let html = POST_HTML.replace("<span>Tetszik</span>", "");
        let doc = Document::parse(&html).unwrap();
        let markers = MarkerSet::default();
        let author = markers.author().unwrap();

        let root = find_post_root(body_node(&doc), &author, &markers.like_label, POST_CLIMB_LIMIT).unwrap();
        assert_eq!(root.attr("id"), Some("post"));
    }

    #[test]
    fn test_find_post_root_none_without_author() {
        let html = POST_HTML.replace(r#"data-ad-rendering-role="profile_name""#, "data-x=\"y\"");
        let doc = Document::parse(&html).unwrap();
        let markers = MarkerSet::default();
        let author = markers.author().unwrap();

        let root = find_post_root(body_node(&doc), &author, &markers.like_label, POST_CLIMB_LIMIT);
        assert!(root.is_none());
    }

    #[test]
    fn test_locate_stats_fragment() {
        let doc = Document::parse(POST_HTML).unwrap();
        let markers = MarkerSet::default();
        let root = doc.select("#post").unwrap()[0];

        let fragment = locate_stats_fragment(root, &markers, FOOTER_CLIMB_LIMIT);
        assert_eq!(
            fragment,
            "Az összes reakció: 3,1 E 161 94 Tetszik Hozzászólás Megosztás"
        );
    }

    #[test]
    fn test_locate_stats_fragment_no_labels() {
        let doc = Document::parse("<div id=\"post\"><p>161 94</p></div>").unwrap();
        let markers = MarkerSet::default();
        let root = doc.select("#post").unwrap()[0];
        assert_eq!(locate_stats_fragment(root, &markers, FOOTER_CLIMB_LIMIT), "");
    }

    #[test]
    fn test_locate_stats_fragment_falls_back_to_anchor() {
        // Labels exist but no counter token anywhere, so the climb exhausts
        // the ceiling and the anchor's own text wins.
        let html = r#"
            <div id="post">
                <div><span>Tetszik</span><span>Hozzászólás</span></div>
            </div>
        "#;
        let doc = Document::parse(html).unwrap();
        let markers = MarkerSet::default();
        let root = doc.select("#post").unwrap()[0];
        assert_eq!(locate_stats_fragment(root, &markers, FOOTER_CLIMB_LIMIT), "Tetszik");
    }

    #[test]
    fn test_locate_stats_fragment_with_reactions_prefix() {
        let html = r#"
            <div id="post">
                <div>
                    <span>Az összes reakció: 12</span>
                    <span>Tetszik</span>
                    <span>Hozzászólás</span>
                </div>
            </div>
        "#;
        let doc = Document::parse(html).unwrap();
        let markers = MarkerSet::default();
        let root = doc.select("#post").unwrap()[0];
        let fragment = locate_stats_fragment(root, &markers, FOOTER_CLIMB_LIMIT);
        assert!(fragment.contains("Az összes reakció: 12"));
        assert!(fragment.contains("Tetszik"));
    }
}
