//! Transport connection establishment.
//!
//! This module opens the duplex byte stream an exchange runs over: a plain
//! `TcpStream` for `http` URLs, a `tokio-rustls` client stream for `https`.
//! Certificate validation uses the bundled `webpki-roots` trust store with
//! the server name set to the URL host.
//!
//! The TCP dial and the TLS handshake are each bounded by a timeout; reads
//! and writes on the established stream are not.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use rustls::pki_types::ServerName;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_rustls::rustls::{ClientConfig, RootCertStore};
use tokio_rustls::TlsConnector;

use crate::config::{TCP_CONNECT_TIMEOUT_SECS, TLS_HANDSHAKE_TIMEOUT_SECS};
use crate::error_handling::FetchError;
use crate::fetch::{ParsedUrl, Scheme};

/// Duplex byte stream, either plaintext or TLS.
///
/// The exchange engine reads and writes through this object without knowing
/// which transport is underneath.
pub trait AsyncStream: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> AsyncStream for T {}

/// Opens a byte stream to the URL's host and port.
///
/// For `https` URLs the TLS handshake is performed before returning, so a
/// successful return means the stream is ready for the request bytes. The
/// stream is closed by dropping it.
///
/// # Errors
///
/// Returns [`FetchError::Connect`] if the dial or the handshake fails or
/// times out.
pub async fn connect(url: &ParsedUrl) -> Result<Box<dyn AsyncStream>, FetchError> {
    debug!("Connecting to {}:{} ({})", url.host, url.port, url.scheme);

    let sock = dial(&url.host, url.port)
        .await
        .map_err(|source| FetchError::Connect {
            host: url.host.clone(),
            source,
        })?;

    match url.scheme {
        Scheme::Http => Ok(Box::new(sock)),
        Scheme::Https => {
            let stream = handshake(&url.host, sock)
                .await
                .map_err(|source| FetchError::Connect {
                    host: url.host.clone(),
                    source,
                })?;
            Ok(Box::new(stream))
        }
    }
}

async fn dial(host: &str, port: u16) -> anyhow::Result<TcpStream> {
    match tokio::time::timeout(
        Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
        TcpStream::connect((host, port)),
    )
    .await
    {
        Ok(Ok(sock)) => Ok(sock),
        Ok(Err(e)) => Err(anyhow::anyhow!("failed to connect to {host}:{port}: {e}")),
        Err(_) => Err(anyhow::anyhow!(
            "TCP connection timeout for {host}:{port} ({TCP_CONNECT_TIMEOUT_SECS}s)"
        )),
    }
}

async fn handshake(
    host: &str,
    sock: TcpStream,
) -> anyhow::Result<tokio_rustls::client::TlsStream<TcpStream>> {
    let mut root_store = RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    let server_name = ServerName::try_from(host.to_string())
        .map_err(|e| anyhow::anyhow!("invalid server name {host:?}: {e}"))?;

    let connector = TlsConnector::from(Arc::new(config));
    match tokio::time::timeout(
        Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
        connector.connect(server_name, sock),
    )
    .await
    {
        Ok(Ok(stream)) => Ok(stream),
        Ok(Err(e)) => Err(anyhow::anyhow!("TLS handshake failed: {e}")),
        Err(_) => Err(anyhow::anyhow!(
            "TLS handshake timeout ({TLS_HANDSHAKE_TIMEOUT_SECS}s)"
        )),
    }
}
