//! Error handling.
//!
//! This module provides the error types for the three fallible surfaces of
//! the crate:
//! - **Fetch errors**: connection, request, and response-stream failures
//! - **Search errors**: fetch failures plus the empty-results case
//! - **Initialization errors**: logger setup failures
//!
//! Parse-level degradations (malformed JSON, empty HTML extraction) are not
//! errors; they fall back to best-effort output instead.

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, ReadStage, SearchError};
