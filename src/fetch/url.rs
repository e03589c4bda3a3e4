//! URL decomposition.
//!
//! Splits a user-supplied URL string into the pieces the connector and the
//! request builder need: scheme, host, port, and path. Parsing is total; a
//! string with no scheme is assumed to be `http`, and a port suffix that does
//! not parse as a port number is ignored in favor of the scheme default.

use log::debug;

use crate::config::{DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT};

/// URL scheme, which selects the transport and the default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plaintext TCP, default port 80.
    Http,
    /// TLS over TCP, default port 443.
    Https,
}

impl Scheme {
    /// Returns the port used when the URL carries no explicit `:port` suffix.
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => DEFAULT_HTTP_PORT,
            Scheme::Https => DEFAULT_HTTPS_PORT,
        }
    }

    /// Returns the scheme name as it appears in a URL, without the `://`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decomposed URL, built once per request and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Transport scheme.
    pub scheme: Scheme,
    /// Host name or address, without any port suffix.
    pub host: String,
    /// Effective port: the explicit `:port` suffix if one parsed, else the
    /// scheme default.
    pub port: u16,
    /// Request path starting with `/`, including any query string.
    pub path: String,
}

impl ParsedUrl {
    /// Decomposes a raw URL string.
    ///
    /// A missing scheme prefix defaults to `http://`. The remainder is split
    /// on the first `/` into host-port and path (`/` when absent), and the
    /// host-port on the first `:` into host and a port override. An override
    /// that does not parse as `u16` is logged and ignored.
    pub fn parse(raw: &str) -> Self {
        let (scheme, remainder) = if let Some(rest) = raw.strip_prefix("https://") {
            (Scheme::Https, rest)
        } else if let Some(rest) = raw.strip_prefix("http://") {
            (Scheme::Http, rest)
        } else {
            (Scheme::Http, raw)
        };

        let (hostport, path) = match remainder.find('/') {
            Some(idx) => (&remainder[..idx], remainder[idx..].to_string()),
            None => (remainder, String::from("/")),
        };

        let mut port = scheme.default_port();
        let host = match hostport.split_once(':') {
            Some((name, suffix)) => {
                match suffix.parse::<u16>() {
                    Ok(explicit) => port = explicit,
                    Err(_) => {
                        debug!("Ignoring malformed port {suffix:?} in {raw:?}, keeping {port}")
                    }
                }
                name.to_string()
            }
            None => hostport.to_string(),
        };

        ParsedUrl {
            scheme,
            host,
            port,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_http() {
        let parsed = ParsedUrl::parse("example.com/a");
        assert_eq!(parsed.scheme, Scheme::Http);
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.port, 80);
        assert_eq!(parsed.path, "/a");
    }

    #[test]
    fn test_parse_https_defaults() {
        let parsed = ParsedUrl::parse("https://example.com");
        assert_eq!(parsed.scheme, Scheme::Https);
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.port, 443);
        assert_eq!(parsed.path, "/");
    }

    #[test]
    fn test_parse_explicit_port() {
        let parsed = ParsedUrl::parse("example.com:8080/x");
        assert_eq!(parsed.scheme, Scheme::Http);
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.port, 8080);
        assert_eq!(parsed.path, "/x");
    }

    #[test]
    fn test_parse_explicit_port_on_https() {
        let parsed = ParsedUrl::parse("https://example.com:8443/secure");
        assert_eq!(parsed.scheme, Scheme::Https);
        assert_eq!(parsed.port, 8443);
        assert_eq!(parsed.path, "/secure");
    }

    #[test]
    fn test_parse_malformed_port_falls_back_to_default() {
        let parsed = ParsedUrl::parse("example.com:notaport/x");
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.port, 80);
        assert_eq!(parsed.path, "/x");

        // Out of u16 range is malformed too
        let parsed = ParsedUrl::parse("https://example.com:99999");
        assert_eq!(parsed.port, 443);
    }

    #[test]
    fn test_parse_keeps_query_in_path() {
        let parsed = ParsedUrl::parse("http://example.com/search?q=a+b&n=1");
        assert_eq!(parsed.path, "/search?q=a+b&n=1");
    }

    #[test]
    fn test_parse_bare_host() {
        let parsed = ParsedUrl::parse("example.com");
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.path, "/");
    }

    #[test]
    fn test_scheme_display() {
        assert_eq!(Scheme::Http.to_string(), "http");
        assert_eq!(Scheme::Https.to_string(), "https");
    }
}
