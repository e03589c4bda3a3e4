//! Redirect-following behavior against local servers.
//!
//! Location headers in these fixtures are absolute URLs carrying the
//! listener's own authority, so every hop lands back on the test server.

use webget::{fetch, FetchError};

#[path = "helpers.rs"]
mod helpers;

use helpers::{bind_listener, http_response, serve_responses};

#[tokio::test]
async fn test_follows_an_absolute_redirect() {
    let (listener, authority) = bind_listener().await;
    let hop = http_response(
        "302 Found",
        &[&format!("Location: http://{authority}/final")],
        "",
    );
    let target = http_response("200 OK", &["Content-Type: text/plain"], "made it");
    let server = serve_responses(listener, vec![hop, target]);

    let output = fetch(&format!("http://{authority}/start"))
        .await
        .expect("fetch failed");

    assert_eq!(output, "made it");
    let requests = server.await.expect("server task failed");
    assert!(requests[0].starts_with("GET /start HTTP/1.1\r\n"));
    assert!(requests[1].starts_with("GET /final HTTP/1.1\r\n"));
}

#[tokio::test]
async fn test_follows_chains_of_redirects() {
    let (listener, authority) = bind_listener().await;
    let hop1 = http_response(
        "301 Moved Permanently",
        &[&format!("Location: http://{authority}/two")],
        "",
    );
    let hop2 = http_response(
        "307 Temporary Redirect",
        &[&format!("Location: http://{authority}/three")],
        "",
    );
    let target = http_response("200 OK", &["Content-Type: text/plain"], "end of chain");
    let server = serve_responses(listener, vec![hop1, hop2, target]);

    let output = fetch(&format!("http://{authority}/one"))
        .await
        .expect("fetch failed");

    assert_eq!(output, "end of chain");
    let requests = server.await.expect("server task failed");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_redirect_body_is_never_read() {
    let (listener, authority) = bind_listener().await;
    // The hop carries its own body; only the target's body may surface.
    let hop = http_response(
        "302 Found",
        &[
            &format!("Location: http://{authority}/real"),
            "Content-Type: text/plain",
        ],
        "interstitial page you should never see",
    );
    let target = http_response("200 OK", &["Content-Type: text/plain"], "the real thing");
    let server = serve_responses(listener, vec![hop, target]);

    let output = fetch(&format!("http://{authority}/jump"))
        .await
        .expect("fetch failed");

    assert_eq!(output, "the real thing");
    server.await.expect("server task failed");
}

#[tokio::test]
async fn test_missing_location_falls_through_to_body() {
    let (listener, authority) = bind_listener().await;
    let response = http_response(
        "302 Found",
        &["Content-Type: text/plain"],
        "redirect with nowhere to go",
    );
    let server = serve_responses(listener, vec![response]);

    // A 3xx without a Location header renders its own body.
    let output = fetch(&format!("http://{authority}/dead-end"))
        .await
        .expect("fetch failed");

    assert_eq!(output, "redirect with nowhere to go");
    server.await.expect("server task failed");
}

#[tokio::test]
async fn test_redirect_loops_hit_the_hop_cap() {
    let (listener, authority) = bind_listener().await;
    let hop = http_response(
        "302 Found",
        &[&format!("Location: http://{authority}/loop")],
        "",
    );
    // Eleven hops: one more than the cap allows.
    let server = serve_responses(listener, vec![hop; 11]);

    let err = fetch(&format!("http://{authority}/loop"))
        .await
        .expect_err("expected the hop cap to trip");

    assert!(
        matches!(err, FetchError::RedirectLimit { limit: 10 }),
        "unexpected error: {err:?}"
    );
    server.await.expect("server task failed");
}
