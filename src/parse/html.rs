//! HTML-to-text rendering.
//!
//! Turns an HTML document into a flat text string for terminal display.
//! The main path walks the parsed tree collecting text nodes; when that
//! yields nothing for a non-empty document, a regex tag-stripper runs
//! over the raw markup instead so malformed pages still render.

use ego_tree::NodeRef;
use regex::Regex;
use scraper::{Html, Node};
use std::sync::LazyLock;

/// Tags that force a line break before their content is visited.
const BREAK_BEFORE_TAGS: [&str; 11] = [
    "div", "p", "br", "li", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

/// Tags that force a line break after their content. `br` has no content
/// of its own, so it only appears in the before list.
const BREAK_AFTER_TAGS: [&str; 10] = [
    "div", "p", "li", "h1", "h2", "h3", "h4", "h5", "h6", "tr",
];

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Renders an HTML document as plain text.
///
/// Walks the parsed tree collecting text nodes, discarding `script` and
/// `style` content, then collapses every whitespace run to a single
/// space. If the walk produces nothing for a non-empty document, falls
/// back to [`strip_tags`].
pub(crate) fn extract_text_from_html(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut buffer = String::new();
    collect_text(document.tree.root(), &mut buffer);

    let text = collapse_whitespace(&buffer);
    if text.is_empty() && !html.trim().is_empty() {
        log::debug!("Tree walk yielded no text, falling back to tag stripping");
        return strip_tags(html);
    }
    text
}

/// Depth-first text collection pass.
///
/// Text nodes append their content plus a trailing space unless their
/// parent is `script` or `style`. Block-level tags contribute newlines,
/// which the final whitespace collapse reduces to spaces.
fn collect_text(node: NodeRef<'_, Node>, buffer: &mut String) {
    match node.value() {
        Node::Text(text) => {
            let hidden = node.parent().is_some_and(|parent| {
                matches!(
                    parent.value(),
                    Node::Element(el) if el.name() == "script" || el.name() == "style"
                )
            });
            if !hidden {
                buffer.push_str(text);
                buffer.push(' ');
            }
        }
        Node::Element(el) => {
            let tag = el.name();
            if BREAK_BEFORE_TAGS.contains(&tag) {
                buffer.push('\n');
            }
            for child in node.children() {
                collect_text(child, buffer);
            }
            if BREAK_AFTER_TAGS.contains(&tag) {
                buffer.push('\n');
            }
        }
        _ => {
            for child in node.children() {
                collect_text(child, buffer);
            }
        }
    }
}

/// Removes markup with a regex and normalizes whitespace. Last-resort
/// rendering for documents the parser cannot make sense of.
fn strip_tags(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    collapse_whitespace(&stripped)
}

/// Collapses every whitespace run to a single space and trims the ends.
fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_content_is_discarded() {
        let text = extract_text_from_html(
            "<html><body><script>ignored()</script><p>visible</p></body></html>",
        );
        assert!(text.contains("visible"));
        assert!(!text.contains("ignored"));
    }

    #[test]
    fn style_content_is_discarded() {
        let text = extract_text_from_html("<style>body { color: red; }</style><p>shown</p>");
        assert_eq!(text, "shown");
    }

    #[test]
    fn block_elements_collapse_to_single_spaces() {
        let text = extract_text_from_html("<div>first</div><div>second</div>");
        assert_eq!(text, "first second");
    }

    #[test]
    fn nested_inline_text_is_joined() {
        let text = extract_text_from_html("<p>Hello <b>bold</b> world</p>");
        assert_eq!(text, "Hello bold world");
    }

    #[test]
    fn list_items_come_out_in_order() {
        let text = extract_text_from_html("<ul><li>one</li><li>two</li><li>three</li></ul>");
        assert_eq!(text, "one two three");
    }

    #[test]
    fn table_rows_are_separated() {
        let text = extract_text_from_html(
            "<table><tr><td>a1</td><td>a2</td></tr><tr><td>b1</td></tr></table>",
        );
        assert_eq!(text, "a1 a2 b1");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(extract_text_from_html(""), "");
    }

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(strip_tags("<p>one</p> <br/>two"), "one two");
    }

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(collapse_whitespace("  a \n\n b\t c  "), "a b c");
    }
}
