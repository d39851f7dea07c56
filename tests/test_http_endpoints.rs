//! Tests for the HTTP surface
//!
//! Drives the route table in-process with `tower::ServiceExt::oneshot`:
//! - echo fidelity and accounting
//! - `/stat` JSON and HTML rendering
//! - claim token endpoint (404 / 405 / 200)

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use scale_echo::EchoServer;
use scale_echo::config::Mode;
use serde_json::Value;
use tower::ServiceExt;

use test_helpers::{test_config, test_config_with_token};

const TOKEN_PATH: &str = "/.well-known/scale-test-claim-token.txt";

async fn call(server: &EchoServer, method: &str, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body.into())
        .unwrap();
    server.router().oneshot(request).await.unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn stat_json(server: &EchoServer) -> Value {
    let response = call(server, "GET", "/stat", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn quiet_server() -> EchoServer {
    let (console, _) = scale_echo::console::Console::capture();
    EchoServer::with_console(test_config(Mode::Count), console)
}

// =============================================================================
// Echo
// =============================================================================

#[tokio::test]
async fn test_echo_returns_body_verbatim() {
    let server = quiet_server();

    let response = call(&server, "POST", "/anything/at/all?x=1", "hello world").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"hello world");

    let totals = server.counters().snapshot_totals();
    assert_eq!(totals.total_requests, 1);
    assert_eq!(totals.total_bytes, 11);
}

#[tokio::test]
async fn test_echo_binary_body() {
    let server = quiet_server();
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let response = call(&server, "PUT", "/upload", payload.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, payload);
    assert_eq!(server.counters().snapshot_totals().total_bytes, 4096);
}

#[tokio::test]
async fn test_echo_any_method_and_empty_body() {
    let server = quiet_server();

    for method in ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"] {
        let response = call(&server, method, "/", Body::empty()).await;
        assert_eq!(response.status(), StatusCode::OK, "method {}", method);
        assert!(body_bytes(response).await.is_empty());
    }

    let totals = server.counters().snapshot_totals();
    assert_eq!(totals.total_requests, 6);
    assert_eq!(totals.total_bytes, 0);
}

#[tokio::test]
async fn test_echo_feeds_period_counters() {
    let server = quiet_server();

    call(&server, "POST", "/a", "abc").await;
    call(&server, "POST", "/b", "defgh").await;

    let period = server.counters().period_totals();
    assert_eq!(period.requests, 2);
    assert_eq!(period.bytes, 8);
}

// =============================================================================
// /stat
// =============================================================================

#[tokio::test]
async fn test_stat_json_shape() {
    let server = quiet_server();
    call(&server, "POST", "/x", "12345").await;
    call(&server, "POST", "/y", "12345").await;

    let response = call(&server, "GET", "/stat", Body::empty()).await;
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
    let raw = body_bytes(response).await;
    assert!(raw.ends_with(b"}\n"));

    let stats: Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(stats["total_requests"], 2);
    assert_eq!(stats["total_bytes"], 10);
    assert_eq!(stats["average_bytes_per_request"], 5.0);
    assert!(stats["uptime_seconds"].as_f64().unwrap() > 0.0);
    assert!(stats["average_requests_per_sec"].as_f64().unwrap() > 0.0);
    assert!(stats["average_bytes_per_sec"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_stat_is_not_counted() {
    let server = quiet_server();
    call(&server, "POST", "/x", "data").await;

    let first = stat_json(&server).await;
    let second = stat_json(&server).await;

    assert_eq!(first["total_requests"], 1);
    assert_eq!(second["total_requests"], 1);
    assert_eq!(server.counters().period_totals().requests, 1);
}

#[tokio::test]
async fn test_stat_with_no_traffic() {
    let server = quiet_server();
    let stats = stat_json(&server).await;

    assert_eq!(stats["total_requests"], 0);
    assert_eq!(stats["total_bytes"], 0);
    assert_eq!(stats["average_requests_per_sec"], 0.0);
    assert_eq!(stats["average_bytes_per_sec"], 0.0);
    assert_eq!(stats["average_bytes_per_request"], 0.0);
}

#[tokio::test]
async fn test_stat_html() {
    let server = quiet_server();
    call(&server, "POST", "/x", "abcd").await;

    let response = call(&server, "GET", "/stat?format=html", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("<li>Total requests: 1</li>"));
    assert!(html.contains("<li>Total bytes: 4</li>"));
    assert!(html.contains("<li>Average bytes/request: 4.0000</li>"));
}

#[tokio::test]
async fn test_stat_unknown_format_falls_back_to_json() {
    let server = quiet_server();

    let response = call(&server, "GET", "/stat?format=xml", Body::empty()).await;
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
}

#[tokio::test]
async fn test_stat_subpath_is_echoed() {
    let server = quiet_server();

    let response = call(&server, "POST", "/stat/extra", "echo me").await;
    assert_eq!(body_bytes(response).await, b"echo me");
    assert_eq!(server.counters().snapshot_totals().total_requests, 1);
}

// =============================================================================
// Claim token
// =============================================================================

#[tokio::test]
async fn test_claim_token_served() {
    let (console, _) = scale_echo::console::Console::capture();
    let server =
        EchoServer::with_console(test_config_with_token(Mode::Count, "abc123"), console);

    let response = call(&server, "GET", TOKEN_PATH, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_bytes(response).await, b"abc123");

    // Token requests are not traffic
    assert_eq!(server.counters().snapshot_totals().total_requests, 0);
}

#[tokio::test]
async fn test_claim_token_wrong_method() {
    let (console, _) = scale_echo::console::Console::capture();
    let server =
        EchoServer::with_console(test_config_with_token(Mode::Count, "abc123"), console);

    for method in ["POST", "PUT", "DELETE"] {
        let response = call(&server, method, TOKEN_PATH, "x").await;
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "method {}",
            method
        );
    }
}

#[tokio::test]
async fn test_claim_token_absent_is_not_found() {
    let server = quiet_server();

    let response = call(&server, "GET", TOKEN_PATH, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Absence wins over the method check
    let response = call(&server, "POST", TOKEN_PATH, Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
