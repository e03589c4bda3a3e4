//! Launching URLs in the system browser.

use log::debug;
use std::io;
use std::process::Command;

/// Builds the platform's opener invocation for a URL.
fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "windows") {
        let mut command = Command::new("rundll32");
        command.args(["url.dll,FileProtocolHandler", url]);
        command
    } else if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

/// Hands a URL to the platform's default opener and returns without
/// waiting for it.
///
/// # Errors
///
/// Returns the spawn error when the opener process cannot be started.
/// Callers treat this as a warning, not a failure.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let mut command = opener_command(url);
    debug!("Launching browser: {command:?}");
    command.spawn()?;
    Ok(())
}
