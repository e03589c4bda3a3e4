//! HTTP response parsing.
//!
//! Parsing is purely line-oriented over a buffered reader: one line for the
//! status, lines until the first empty one for the header block, then every
//! remaining line as the body. Lines are decoded lossily, so a response with
//! invalid UTF-8 still renders rather than failing.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error_handling::{FetchError, ReadStage};

static STATUS_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"HTTP/[\d.]+\s+(\d+)").expect("status code pattern must parse")
});

/// A parsed HTTP response, built incrementally while draining the stream.
#[derive(Debug)]
pub(crate) struct HttpResponse {
    /// Status code from the status line; 0 when the line did not match.
    pub(crate) status: u16,
    /// Header map with lower-cased names, last write wins.
    pub(crate) headers: HashMap<String, String>,
    /// Body text, read to end-of-stream.
    pub(crate) body: String,
}

/// Reads one line including its terminator, `None` at end-of-stream.
///
/// A final line without a trailing newline is still returned in full.
pub(crate) async fn read_line<R>(
    reader: &mut R,
    stage: ReadStage,
) -> Result<Option<String>, FetchError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader
        .read_until(b'\n', &mut buf)
        .await
        .map_err(|source| FetchError::Protocol { stage, source })?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Extracts the 3-digit status code from a status line.
///
/// Returns 0 when the line does not look like `HTTP/<version> <code>`,
/// which downstream treats as "not a redirect".
pub(crate) fn parse_status_code(status_line: &str) -> u16 {
    STATUS_CODE_RE
        .captures(status_line)
        .and_then(|caps| caps.get(1))
        .and_then(|code| code.as_str().parse().ok())
        .unwrap_or(0)
}

/// Reads the header block, stopping at the first empty line.
///
/// Each line is split on the first `:`; name and value are trimmed and the
/// name lower-cased before insertion. Lines without a `:` are skipped.
/// End-of-stream before the blank line is an error, since the body could
/// not be told apart from unterminated headers.
pub(crate) async fn read_headers<R>(reader: &mut R) -> Result<HashMap<String, String>, FetchError>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = HashMap::new();
    loop {
        let line = read_line(reader, ReadStage::Headers)
            .await?
            .ok_or(FetchError::UnexpectedEof {
                stage: ReadStage::Headers,
            })?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }
    Ok(headers)
}

/// Reads the rest of the stream as the body.
///
/// End-of-stream is the normal terminator here; only a mid-stream I/O error
/// is surfaced.
pub(crate) async fn read_body<R>(reader: &mut R) -> Result<String, FetchError>
where
    R: AsyncBufRead + Unpin,
{
    let mut body = String::new();
    while let Some(line) = read_line(reader, ReadStage::Body).await? {
        body.push_str(&line);
    }
    Ok(body)
}
