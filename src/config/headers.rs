//! HTTP header name constants.
//!
//! Lookup keys into the response header map. Header names are lower-cased
//! before insertion, so these are the lower-case forms.

/// Redirect target header
pub const HEADER_LOCATION: &str = "location";
/// Media type header, drives content formatting
pub const HEADER_CONTENT_TYPE: &str = "content-type";
