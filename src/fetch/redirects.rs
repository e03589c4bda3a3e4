//! HTTP redirect target resolution.
//!
//! This module turns a `Location` header value into the absolute URL the
//! next hop of the exchange should be issued against.

use crate::fetch::ParsedUrl;

/// Whether a status code asks the client to go elsewhere.
pub(crate) fn is_redirect(status: u16) -> bool {
    (300..400).contains(&status)
}

/// Resolves a `Location` value against the URL the response came from.
///
/// Three forms are recognized:
/// - absolute (`http` prefix): used as-is;
/// - root-relative (leading `/`): `scheme://host` plus the location;
/// - relative: the base path up to and including its last `/`, then the
///   location, prefixed with `scheme://host`.
///
/// Host-based resolution uses the bare host; an explicit port on the base
/// URL is not carried to the target.
pub(crate) fn resolve_location(base: &ParsedUrl, location: &str) -> String {
    if location.starts_with("http") {
        return location.to_string();
    }

    if location.starts_with('/') {
        return format!("{}://{}{}", base.scheme, base.host, location);
    }

    let base_path = match base.path.rfind('/') {
        Some(idx) => &base.path[..idx + 1],
        None => "/",
    };
    format!("{}://{}{}{}", base.scheme, base.host, base_path, location)
}
