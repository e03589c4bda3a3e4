// Shared test helpers for serving canned HTTP responses.
//
// The client under test speaks HTTP/1.1 over a plain socket, so a test
// server is just a listener that reads the request bytes and writes a
// pre-baked response. Each helper serves a fixed number of connections,
// in order, then hands back the requests it saw.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Binds a listener on an ephemeral loopback port and returns it with
/// its `host:port` authority.
#[allow(dead_code)] // Used by other test files
pub async fn bind_listener() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let port = listener.local_addr().expect("Failed to read local addr").port();
    (listener, format!("127.0.0.1:{port}"))
}

/// Serves one canned response per connection, in order, then stops.
///
/// The task resolves to the raw request bytes observed on each
/// connection, so tests can assert on the wire format the client sent.
#[allow(dead_code)] // Used by other test files
pub fn serve_responses(listener: TcpListener, responses: Vec<String>) -> JoinHandle<Vec<String>> {
    tokio::spawn(async move {
        let mut requests = Vec::with_capacity(responses.len());
        for response in responses {
            let (mut socket, _) = listener.accept().await.expect("Accept failed");

            // Requests here are bodyless GETs, so the blank line after the
            // headers is the end of the request.
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.expect("Request read failed");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            requests.push(String::from_utf8_lossy(&request).into_owned());

            socket
                .write_all(response.as_bytes())
                .await
                .expect("Response write failed");
            socket.shutdown().await.expect("Socket shutdown failed");
        }
        requests
    })
}

/// Formats a minimal HTTP/1.1 response from a status, header lines, and
/// a body. The body is sent as-is and terminated by connection close.
#[allow(dead_code)] // Used by other test files
pub fn http_response(status: &str, headers: &[&str], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {status}\r\n");
    for header in headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str("\r\n");
    response.push_str(body);
    response
}
