//! Configuration constants.
//!
//! This module defines the fixed operational parameters used throughout the
//! application: request header values, network timeouts, redirect and search
//! caps, and the search endpoint.

// Network operation timeouts
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;

// Request line and headers
/// User-Agent sent with every request.
///
/// A fixed, current-looking browser string. Some origins serve reduced or
/// blocked content to obvious non-browser agents; the lite search endpoint
/// in particular expects one.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36";
/// Accept header sent with every request.
pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
/// Accept-Language header sent with every request.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

// Default ports by scheme
/// Port used for `http` URLs without an explicit `:port` suffix.
pub const DEFAULT_HTTP_PORT: u16 = 80;
/// Port used for `https` URLs without an explicit `:port` suffix.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

// Search
/// Lite search results endpoint. The extractor's heuristics are coupled to
/// this page's table layout, so the host is not configurable at runtime
/// except through [`WEBGET_SEARCH_ENDPOINT_ENV`].
pub const SEARCH_ENDPOINT: &str = "https://lite.duckduckgo.com/lite";
/// Environment variable that overrides [`SEARCH_ENDPOINT`] when set to a
/// non-blank value. Integration tests point this at a local fixture server.
pub const WEBGET_SEARCH_ENDPOINT_ENV: &str = "WEBGET_SEARCH_ENDPOINT";
/// Maximum number of search results returned per query.
pub const MAX_SEARCH_RESULTS: usize = 10;
/// Substring identifying the search provider's redirect-wrapper URLs,
/// which embed the true destination in their `uddg` query parameter.
pub const REDIRECT_WRAPPER_MARKER: &str = "duckduckgo.com/l/?uddg=";
