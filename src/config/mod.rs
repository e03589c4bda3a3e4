//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, header values, caps)
//! - HTTP header name constants
//! - CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
