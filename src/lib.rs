//! webget library: raw-socket HTTP fetching and lite search scraping.
//!
//! This library speaks HTTP/1.1 directly over TCP or TLS, parses the wire
//! response by hand, follows redirects, and renders bodies for terminal
//! display: JSON pretty-printed, HTML reduced to its text, anything else
//! trimmed. A search layer drives the same client against a lite results
//! page and scrapes it into structured entries.
//!
//! # Example
//!
//! ```no_run
//! use webget::{fetch, search};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = fetch("example.com").await?;
//! println!("{page}");
//!
//! for result in search("rust async io").await? {
//!     println!("{} -> {}", result.title, result.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call these functions from within an async context.

#![warn(missing_docs)]

mod browser;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod parse;
mod search;
mod transport;

// Re-export public API
pub use browser::open_in_browser;
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError, ReadStage, SearchError};
pub use fetch::{fetch, fetch_raw, ParsedUrl, Scheme};
pub use search::{search, SearchResult};
