//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use std::io;

use log::SetLoggerError;
use thiserror::Error;

/// Stage of response parsing at which a stream failure occurred.
///
/// Carried by [`FetchError::Protocol`] and [`FetchError::UnexpectedEof`] so
/// reported errors say where in the exchange the stream gave out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStage {
    /// Reading the `HTTP/<version> <code>` line.
    StatusLine,
    /// Reading the header block, up to the first empty line.
    Headers,
    /// Reading the response body.
    Body,
}

impl ReadStage {
    /// Returns a human-readable name for the parsing stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadStage::StatusLine => "status line",
            ReadStage::Headers => "headers",
            ReadStage::Body => "body",
        }
    }
}

impl std::fmt::Display for ReadStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for a single HTTP exchange.
#[derive(Error, Debug)]
pub enum FetchError {
    /// TCP dial or TLS handshake failure, including timeouts.
    #[error("Connection to {host} failed: {source}")]
    Connect {
        /// Host the dial was attempted against.
        host: String,
        /// Underlying dial, handshake, or timeout cause.
        #[source]
        source: anyhow::Error,
    },

    /// Failure writing the request onto an established stream.
    #[error("Failed to send request: {0}")]
    SendRequest(#[source] io::Error),

    /// Unexpected stream failure while reading the response.
    ///
    /// End-of-stream mid-body is not a protocol error; it is the normal
    /// terminator for `Connection: close` responses.
    #[error("Stream error while reading {stage}: {source}")]
    Protocol {
        /// Parsing stage that was in progress.
        stage: ReadStage,
        /// Underlying I/O cause.
        #[source]
        source: io::Error,
    },

    /// Stream ended before the status line or header block was complete.
    #[error("Connection closed while reading {stage}")]
    UnexpectedEof {
        /// Parsing stage that was in progress.
        stage: ReadStage,
    },

    /// The redirect chain exceeded the hop cap.
    #[error("Redirect limit of {limit} hops exceeded")]
    RedirectLimit {
        /// Configured maximum number of hops.
        limit: usize,
    },
}

/// Error types for search operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The underlying request to the search endpoint failed.
    #[error(transparent)]
    Request(#[from] FetchError),

    /// The results page yielded no usable results.
    ///
    /// Callers must treat this as a failure; an empty list is never returned
    /// as success.
    #[error("No search results found")]
    NoResults,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
