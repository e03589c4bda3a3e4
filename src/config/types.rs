//! Configuration types for command-line argument parsing.

use clap::{ArgGroup, Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Exactly one mode is required per invocation: fetch a URL or run a
/// search. Invoking with no arguments prints the help text.
#[derive(Parser, Debug)]
#[command(
    name = "webget",
    version,
    about = "Fetch pages over raw HTTP/1.1 and search the web from the terminal",
    arg_required_else_help = true,
    group(ArgGroup::new("mode").required(true).args(["url", "search"]))
)]
pub struct Config {
    /// URL to fetch; the rendered response body is printed to stdout
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    /// Term to search for; the top results are printed as a numbered list
    #[arg(short = 's', long, value_name = "TERM")]
    pub search: Option<String>,

    /// Print search results as JSON instead of the numbered list
    #[arg(long, conflicts_with = "url")]
    pub json: bool,

    /// Minimum log level to display
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
