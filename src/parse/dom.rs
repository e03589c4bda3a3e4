//! Tree navigation helpers over parsed HTML.
//!
//! `scraper` exposes the parsed document as an `ego_tree` arena; these
//! helpers cover the walks the extractors need that CSS selectors do not
//! express well (ancestor lookup, sibling hops, exact class matches).

use ego_tree::NodeRef;
use scraper::Node;

/// Concatenated text of a node's descendant text nodes, the node itself
/// included, trimmed. No separator is inserted between adjacent text
/// nodes.
pub(crate) fn text_content(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let Some(fragment) = descendant.value().as_text() {
            text.push_str(fragment);
        }
    }
    text.trim().to_string()
}

/// Finds the nearest ancestor element with the given tag name.
pub(crate) fn ancestor_with_tag<'a>(
    node: NodeRef<'a, Node>,
    tag: &str,
) -> Option<NodeRef<'a, Node>> {
    node.ancestors()
        .find(|n| n.value().as_element().is_some_and(|el| el.name() == tag))
}

/// Finds the next sibling that is an element, skipping any text or
/// comment nodes in between.
pub(crate) fn next_sibling_element(node: NodeRef<'_, Node>) -> Option<NodeRef<'_, Node>> {
    node.next_siblings().find(|n| n.value().is_element())
}

/// Finds the first descendant, the node itself included, whose `class`
/// attribute equals `class` exactly. Multi-class attribute values do
/// not match.
pub(crate) fn descendant_with_class<'a>(
    node: NodeRef<'a, Node>,
    class: &str,
) -> Option<NodeRef<'a, Node>> {
    node.descendants().find(|n| {
        n.value()
            .as_element()
            .is_some_and(|el| el.attr("class") == Some(class))
    })
}
