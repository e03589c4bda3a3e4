//! HTTP request building.

use crate::config::{ACCEPT, ACCEPT_LANGUAGE, DEFAULT_USER_AGENT};
use crate::fetch::ParsedUrl;

/// Formats the fixed-shape GET request for a URL.
///
/// Request line plus `Host`, `Connection: close`, `User-Agent`, `Accept`,
/// and `Accept-Language`, CRLF line endings, terminated by the blank line
/// that closes the header block. No body is ever sent. `Connection: close`
/// is what lets the response body be read to end-of-stream.
pub(crate) fn build_request(url: &ParsedUrl) -> String {
    format!(
        "GET {path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Connection: close\r\n\
         User-Agent: {agent}\r\n\
         Accept: {accept}\r\n\
         Accept-Language: {language}\r\n\
         \r\n",
        path = url.path,
        host = url.host,
        agent = DEFAULT_USER_AGENT,
        accept = ACCEPT,
        language = ACCEPT_LANGUAGE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_shape() {
        let url = ParsedUrl::parse("http://example.com/a/b?q=1");
        let request = build_request(&url);

        assert!(request.starts_with("GET /a/b?q=1 HTTP/1.1\r\n"));
        assert!(request.contains("Host: example.com\r\n"));
        assert!(request.contains("Connection: close\r\n"));
        assert!(request.contains("User-Agent: "));
        assert!(request.contains("Accept: "));
        assert!(request.contains("Accept-Language: "));
        assert!(request.ends_with("\r\n\r\n"));
    }

    #[test]
    fn test_build_request_host_has_no_port() {
        // The Host header carries the bare host even when the URL names a port
        let url = ParsedUrl::parse("http://example.com:8080/x");
        let request = build_request(&url);
        assert!(request.contains("Host: example.com\r\n"));
        assert!(!request.contains("8080"));
    }

    #[test]
    fn test_build_request_root_path() {
        let url = ParsedUrl::parse("example.com");
        let request = build_request(&url);
        assert!(request.starts_with("GET / HTTP/1.1\r\n"));
    }
}
