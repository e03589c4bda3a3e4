//! Web search against a lite results page.
//!
//! Issues a GET through the exchange engine (raw mode) against a
//! DuckDuckGo Lite endpoint and scrapes the returned table layout into
//! structured results. The extraction heuristics are coupled to that
//! page's row structure: a `result-link` anchor, a snippet row below
//! it, and a display-URL row below that.

use ego_tree::NodeRef;
use log::{debug, info};
use scraper::{Html, Node};
use serde::Serialize;
use url::form_urlencoded;

use crate::config::{
    MAX_SEARCH_RESULTS, REDIRECT_WRAPPER_MARKER, SEARCH_ENDPOINT, WEBGET_SEARCH_ENDPOINT_ENV,
};
use crate::error_handling::SearchError;
use crate::fetch::fetch_raw;
use crate::parse::{ancestor_with_tag, descendant_with_class, next_sibling_element, text_content};

/// One scraped search result, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Link text of the result anchor.
    pub title: String,
    /// Destination URL with the provider's redirect wrapper unwrapped.
    pub url: String,
    /// Snippet text from the row below the anchor, when present.
    pub description: Option<String>,
}

/// Searches for a term and returns up to [`MAX_SEARCH_RESULTS`] results.
///
/// # Errors
///
/// Returns [`SearchError::Request`] if the underlying fetch fails and
/// [`SearchError::NoResults`] if the page yields no usable results. An
/// empty list is never returned.
pub async fn search(term: &str) -> Result<Vec<SearchResult>, SearchError> {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", term)
        .finish();
    let query_url = format!("{}?{}", search_endpoint(), query);
    info!("Searching for {term:?}");
    debug!("Search query URL: {query_url}");

    let body = fetch_raw(&query_url).await?;
    let document = Html::parse_document(&body);

    let results = extract_results(&document);
    if results.is_empty() {
        return Err(SearchError::NoResults);
    }
    Ok(results)
}

/// The search endpoint, overridable through the environment for tests
/// and alternate mirrors. Blank values are ignored.
fn search_endpoint() -> String {
    std::env::var(WEBGET_SEARCH_ENDPOINT_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| SEARCH_ENDPOINT.to_string())
}

/// Walks the document and collects well-formed result rows, capped at
/// [`MAX_SEARCH_RESULTS`] in document order.
fn extract_results(document: &Html) -> Vec<SearchResult> {
    let mut results = Vec::new();

    for node in document.tree.root().descendants() {
        let Some(href) = result_link_href(node) else {
            continue;
        };

        let title = text_content(node);

        // The anchor lives inside a table row; the snippet sits in the
        // next row and the display URL in the row after that.
        let Some(row) = ancestor_with_tag(node, "tr") else {
            continue;
        };

        let snippet_row = next_sibling_element(row);
        let description = snippet_row
            .and_then(|r| descendant_with_class(r, "result-snippet"))
            .map(text_content)
            .filter(|text| !text.is_empty());

        let display_url = snippet_row
            .and_then(next_sibling_element)
            .and_then(|r| descendant_with_class(r, "link-text"))
            .map(text_content)
            .unwrap_or_default();

        let url = resolve_result_url(href, &display_url);
        if !title.is_empty() && !url.is_empty() {
            results.push(SearchResult {
                title,
                url,
                description,
            });
        }
    }

    results.truncate(MAX_SEARCH_RESULTS);
    results
}

/// Returns the `href` when the node is a result anchor: an `a` element
/// whose `class` is exactly `result-link`, with a non-empty `href`.
fn result_link_href(node: NodeRef<'_, Node>) -> Option<&str> {
    let element = node.value().as_element()?;
    if element.name() != "a" || element.attr("class") != Some("result-link") {
        return None;
    }
    element.attr("href").filter(|href| !href.is_empty())
}

/// Resolves an anchor's `href` into the destination URL.
///
/// Wrapper links carry the destination percent-encoded in their `uddg`
/// query parameter; when that parameter is missing or empty, the
/// human-readable display URL stands in. Protocol-relative links get an
/// `https:` scheme, anything else passes through as-is.
fn resolve_result_url(href: &str, display_url: &str) -> String {
    if href.contains(REDIRECT_WRAPPER_MARKER) {
        return match decode_wrapper_param(href) {
            Some(url) => url,
            None => display_url.to_string(),
        };
    }
    if href.starts_with("//") {
        return format!("https:{href}");
    }
    href.to_string()
}

/// Pulls the percent-decoded `uddg` parameter out of a wrapper link.
fn decode_wrapper_param(href: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
