//! HTTP exchange engine.
//!
//! This module owns the full request/response lifecycle:
//! - URL decomposition ([`ParsedUrl`])
//! - request formatting and sending over a [`crate::transport`] stream
//! - line-oriented parsing of the status line, headers, and body
//! - redirect following, one fresh connection per hop, bounded by
//!   [`crate::config::MAX_REDIRECT_HOPS`]
//!
//! Two output modes sit on top: [`fetch`] renders the body for terminal
//! display via [`crate::parse`], [`fetch_raw`] hands the body back verbatim
//! (the search subsystem parses it itself).

mod redirects;
mod request;
mod response;
mod url;

pub use url::{ParsedUrl, Scheme};

use log::{debug, info, warn};
use tokio::io::{AsyncWriteExt, BufReader};

use crate::config::{HEADER_LOCATION, MAX_REDIRECT_HOPS};
use crate::error_handling::{FetchError, ReadStage};
use crate::transport;

use request::build_request;
use response::HttpResponse;

/// What a single exchange produced: either a redirect to chase or a
/// complete response.
///
/// On a redirect the connection is dropped without reading the body; the
/// next hop opens its own.
enum ExchangeOutcome {
    Redirect { location: String },
    Complete(HttpResponse),
}

/// Runs one request/response exchange on a fresh connection.
async fn exchange_once(url: &ParsedUrl) -> Result<ExchangeOutcome, FetchError> {
    let stream = transport::connect(url).await?;
    let mut reader = BufReader::new(stream);

    let request = build_request(url);
    reader
        .get_mut()
        .write_all(request.as_bytes())
        .await
        .map_err(FetchError::SendRequest)?;

    let status_line = response::read_line(&mut reader, ReadStage::StatusLine)
        .await?
        .ok_or(FetchError::UnexpectedEof {
            stage: ReadStage::StatusLine,
        })?;
    let status = response::parse_status_code(&status_line);
    let headers = response::read_headers(&mut reader).await?;

    if redirects::is_redirect(status) {
        match headers.get(HEADER_LOCATION) {
            Some(location) => {
                return Ok(ExchangeOutcome::Redirect {
                    location: location.clone(),
                })
            }
            // Not an error: fall through and read the (likely empty) body
            None => warn!("Redirect status {status} with no Location header"),
        }
    }

    let body = response::read_body(&mut reader).await?;
    Ok(ExchangeOutcome::Complete(HttpResponse {
        status,
        headers,
        body,
    }))
}

/// Issues a GET against a URL, following redirects until a final response.
async fn perform(raw_url: &str) -> Result<HttpResponse, FetchError> {
    let mut current = ParsedUrl::parse(raw_url);
    let mut hops = 0usize;

    loop {
        match exchange_once(&current).await? {
            ExchangeOutcome::Complete(resp) => {
                debug!(
                    "Received {} from {} ({} bytes)",
                    resp.status,
                    current.host,
                    resp.body.len()
                );
                return Ok(resp);
            }
            ExchangeOutcome::Redirect { location } => {
                hops += 1;
                if hops > MAX_REDIRECT_HOPS {
                    return Err(FetchError::RedirectLimit {
                        limit: MAX_REDIRECT_HOPS,
                    });
                }
                let target = redirects::resolve_location(&current, &location);
                info!("Following redirect to: {target}");
                current = ParsedUrl::parse(&target);
            }
        }
    }
}

/// Fetches a URL and renders the response for terminal display.
///
/// The body is formatted by content type: JSON is pretty-printed, HTML is
/// reduced to its text, anything else is returned trimmed. The response
/// status does not affect rendering; an error page's body renders like any
/// other.
///
/// # Errors
///
/// Returns a [`FetchError`] if the connection, the request write, or the
/// response parse fails, or if the redirect chain exceeds the hop cap.
pub async fn fetch(url: &str) -> Result<String, FetchError> {
    let resp = perform(url).await?;
    Ok(crate::parse::format_response(&resp.headers, &resp.body))
}

/// Fetches a URL and returns the response body verbatim.
///
/// Redirects are still followed; only the rendering step is skipped. The
/// search subsystem uses this to get the results page HTML unaltered.
///
/// # Errors
///
/// Same failure modes as [`fetch`].
pub async fn fetch_raw(url: &str) -> Result<String, FetchError> {
    let resp = perform(url).await?;
    Ok(resp.body)
}
