// SPDX-License-Identifier: Apache-2.0

//! Ops endpoints and the request hygiene layer: request-id propagation, URI
//! size limits, and the metrics exposition.

use std::net::SocketAddr;
use std::sync::Arc;

use henhouse_server::{build_router, ApiConfig, AppState};
use henhouse_store::MockDb;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn spawn_server(api: ApiConfig) -> SocketAddr {
    let state = AppState::with_config(Arc::new(MockDb::seeded()), api);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

async fn send_raw(addr: SocketAddr, path: &str, extra_headers: &[(&str, &str)]) -> (u16, String, String) {
    let mut req = format!("GET {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n");
    for (name, value) in extra_headers {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    req.push_str("\r\n");
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(req.as_bytes()).await.expect("write");
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read");
    let text = String::from_utf8_lossy(&buf).to_string();
    let status = text
        .split_whitespace()
        .nth(1)
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(0);
    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text.as_str(), ""));
    (status, head.to_string(), body.to_string())
}

#[tokio::test]
async fn health_and_readiness_answer_without_a_token() {
    let addr = spawn_server(ApiConfig::default()).await;

    let (status, _, body) = send_raw(addr, "/healthz", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, _, body) = send_raw(addr, "/readyz", &[]).await;
    assert_eq!(status, 200);
    assert_eq!(body, "ready");
}

#[tokio::test]
async fn version_reports_crate_and_schema() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, _, body) = send_raw(addr, "/version", &[]).await;
    assert_eq!(status, 200);
    let version: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(version["crate"], "henhouse-server");
    assert_eq!(version["config_schema_version"], 1);
}

#[tokio::test]
async fn client_request_id_is_echoed_back() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (_, head, _) = send_raw(addr, "/healthz", &[("x-request-id", "req-test-42")]).await;
    assert!(
        head.to_ascii_lowercase().contains("x-request-id: req-test-42"),
        "missing echo in: {head}"
    );
}

#[tokio::test]
async fn server_mints_a_request_id_when_none_is_sent() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (_, head, _) = send_raw(addr, "/healthz", &[]).await;
    assert!(head.to_ascii_lowercase().contains("x-request-id: req-"));
}

#[tokio::test]
async fn oversized_uri_is_rejected_by_policy() {
    let api = ApiConfig {
        max_uri_bytes: 128,
        ..ApiConfig::default()
    };
    let addr = spawn_server(api).await;
    let long = format!("/healthz?pad={}", "x".repeat(256));
    let (status, _, body) = send_raw(addr, &long, &[]).await;
    assert_eq!(status, 400);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["code"], "rejected_by_policy");
    assert_eq!(err["message"], "request URI too large");
}

#[tokio::test]
async fn metrics_expose_request_counts_and_store_rows() {
    let addr = spawn_server(ApiConfig::default()).await;
    let (status, _, _) = send_raw(addr, "/healthz", &[]).await;
    assert_eq!(status, 200);

    let (status, _, body) = send_raw(addr, "/metrics", &[]).await;
    assert_eq!(status, 200);
    assert!(body.contains("henhouse_http_requests_total"));
    assert!(body.contains("route=\"/healthz\",status=\"200\""));
    assert!(body.contains("henhouse_store_rows"));
    assert!(body.contains("collection=\"inventory\"} 2"));
}

#[tokio::test]
async fn cors_preflight_allows_the_configured_origin_only() {
    let addr = spawn_server(ApiConfig::default()).await;

    let mut req = String::from(
        "OPTIONS /api/inventory HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\norigin: http://localhost:3000\r\n\r\n",
    );
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(req.as_bytes()).await.expect("write");
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read");
    let text = String::from_utf8_lossy(&buf).to_ascii_lowercase();
    assert!(text.starts_with("http/1.1 204"));
    assert!(text.contains("access-control-allow-origin: http://localhost:3000"));
    assert!(text.contains("vary: origin"), "grant is per-origin");

    req = req.replace("http://localhost:3000", "http://evil.example");
    let mut stream = TcpStream::connect(addr).await.expect("connect");
    stream.write_all(req.as_bytes()).await.expect("write");
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.expect("read");
    let text = String::from_utf8_lossy(&buf).to_ascii_lowercase();
    assert!(!text.contains("access-control-allow-origin"));
}
