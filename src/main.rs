//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `webget` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and the result-selection prompt
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use webget::initialization::{init_crypto_provider, init_logger_with};
use webget::{fetch, open_in_browser, search, Config, SearchResult};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // The crypto provider must be in place before the first TLS connection
    init_crypto_provider();

    if let Err(e) = run(&config).await {
        eprintln!("webget error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

/// Dispatches to fetch or search mode; clap guarantees exactly one is set.
async fn run(config: &Config) -> Result<()> {
    if let Some(url) = &config.url {
        let rendered = fetch(url).await?;
        println!("{rendered}");
        return Ok(());
    }

    if let Some(term) = &config.search {
        let results = search(term).await?;
        if config.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            print_results(&results);
            prompt_and_open(&results)?;
        }
    }

    Ok(())
}

/// Prints results as a numbered list, one blank line between entries.
fn print_results(results: &[SearchResult]) {
    for (index, result) in results.iter().enumerate() {
        println!("{}. {}\n   URL: {}\n", index + 1, result.title, result.url);
    }
}

/// Asks which result to open and hands the chosen URL to the browser.
///
/// An empty line exits quietly; anything that is not a number in range
/// prints `Invalid selection.` and exits. A browser that fails to launch
/// is a warning, not an error.
fn prompt_and_open(results: &[SearchResult]) -> Result<()> {
    print!("Enter a number to open a result (1-10), or press Enter to exit: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read selection")?;
    let input = input.trim();
    if input.is_empty() {
        return Ok(());
    }

    let selection = match input.parse::<usize>() {
        Ok(n) if (1..=results.len()).contains(&n) => n,
        _ => {
            println!("Invalid selection.");
            return Ok(());
        }
    };

    let url = &results[selection - 1].url;
    println!("Opening: {url}");
    if let Err(e) = open_in_browser(url) {
        warn!("Failed to open browser: {e}");
    }
    Ok(())
}
