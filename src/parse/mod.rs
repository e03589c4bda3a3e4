//! Response rendering.
//!
//! The exchange engine hands every non-raw response here. Rendering is a
//! pure function of the header map and body: the `content-type` header
//! picks the strategy, and parse failures always degrade to a cruder
//! rendering instead of surfacing as errors.

mod dom;
mod html;

pub(crate) use dom::{
    ancestor_with_tag, descendant_with_class, next_sibling_element, text_content,
};

use std::collections::HashMap;

use crate::config::HEADER_CONTENT_TYPE;

/// Renders a response body according to its `content-type` header.
///
/// The match is a substring check on the lower-cased header value:
/// - `application/json`: pretty-printed with 2-space indentation; bodies
///   that fail to parse come back unchanged.
/// - `text/html`: reduced to the document's text.
/// - anything else, or no header at all: trimmed and returned.
pub(crate) fn format_response(headers: &HashMap<String, String>, body: &str) -> String {
    let content_type = headers
        .get(HEADER_CONTENT_TYPE)
        .map(|value| value.to_lowercase())
        .unwrap_or_default();

    if content_type.contains("application/json") {
        format_json(body)
    } else if content_type.contains("text/html") {
        html::extract_text_from_html(body)
    } else {
        body.trim().to_string()
    }
}

/// Pretty-prints a JSON body, passing it through untouched when it does
/// not parse.
fn format_json(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(e) => {
            log::debug!("Body is not valid JSON ({e}), returning it unchanged");
            body.to_string()
        }
    }
}
