//! Process-wide setup.
//!
//! Logger configuration and the TLS crypto provider, both run once at
//! startup before the first request goes out.

mod logger;

use rustls::crypto::{ring::default_provider, CryptoProvider};

pub use logger::init_logger_with;

/// Installs the process-wide crypto provider for TLS connections.
///
/// Must be called before the first TLS handshake is attempted.
pub fn init_crypto_provider() {
    // Ignore the result; a provider may already be installed
    let _ = CryptoProvider::install_default(default_provider());
}
