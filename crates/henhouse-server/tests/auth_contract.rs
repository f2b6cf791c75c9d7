// SPDX-License-Identifier: Apache-2.0

//! Auth family contract: login, register, me, logout, and the token gate on
//! the protected routes.

use std::net::SocketAddr;
use std::sync::Arc;

use henhouse_server::{build_router, AppState};
use henhouse_store::MockDb;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

async fn spawn_server() -> SocketAddr {
    let state = AppState::new(Arc::new(MockDb::seeded()));
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

async fn send_with_headers(
    addr: SocketAddr,
    method: &str,
    path: &str,
    extra_headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut req = format!("{method} {path} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n");
    for (name, value) in extra_headers {
        req.push_str(&format!("{name}: {value}\r\n"));
    }
    match body {
        Some(b) => req.push_str(&format!(
            "content-type: application/json\r\ncontent-length: {}\r\n\r\n{b}",
            b.len()
        )),
        None => req.push_str("\r\n"),
    }
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

async fn login_token(addr: SocketAddr) -> String {
    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/login",
        &[],
        Some(r#"{"email":"farmer@example.com","password":"whatever"}"#),
    )
    .await;
    assert_eq!(status, 200, "login failed: {body}");
    let value: Value = serde_json::from_str(&body).expect("json");
    value["token"].as_str().expect("token").to_string()
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let addr = spawn_server().await;

    let (status, _, body) = send_with_headers(addr, "GET", "/api/inventory", &[], None).await;
    assert_eq!(status, 401);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "Authentication required");

    let (status, _, body) = send_with_headers(
        addr,
        "GET",
        "/api/inventory",
        &[("authorization", "Bearer not-a-token")],
        None,
    )
    .await;
    assert_eq!(status, 401);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "Invalid or expired token");
}

#[tokio::test]
async fn bearer_and_cookie_tokens_both_pass_the_gate() {
    let addr = spawn_server().await;
    let token = login_token(addr).await;

    let (status, _, _) = send_with_headers(
        addr,
        "GET",
        "/api/inventory",
        &[("authorization", &format!("Bearer {token}"))],
        None,
    )
    .await;
    assert_eq!(status, 200);

    let (status, _, _) = send_with_headers(
        addr,
        "GET",
        "/api/inventory",
        &[("cookie", &format!("auth-token={token}"))],
        None,
    )
    .await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn login_validates_presence_and_identity() {
    let addr = spawn_server().await;

    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/login",
        &[],
        Some(r#"{"email":"farmer@example.com"}"#),
    )
    .await;
    assert_eq!(status, 400);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "Email and password are required");

    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/login",
        &[],
        Some(r#"{"email":"nobody@example.com","password":"x"}"#),
    )
    .await;
    assert_eq!(status, 401);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_sets_the_auth_cookie() {
    let addr = spawn_server().await;
    let (status, head, _) = send_with_headers(
        addr,
        "POST",
        "/api/auth/login",
        &[],
        Some(r#"{"email":"admin@poultrymanager.com","password":"x"}"#),
    )
    .await;
    assert_eq!(status, 200);
    let head = head.to_ascii_lowercase();
    assert!(head.contains("set-cookie: auth-token="));
    assert!(head.contains("httponly"));
}

#[tokio::test]
async fn register_validates_and_rejects_duplicates() {
    let addr = spawn_server().await;

    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/register",
        &[],
        Some(r#"{"username":"newbie","email":"newbie@example.com"}"#),
    )
    .await;
    assert_eq!(status, 400);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "Missing required fields");

    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/register",
        &[],
        Some(
            &json!({
                "username": "admin",
                "email": "someone@example.com",
                "password": "pw",
                "firstName": "Some",
                "lastName": "One"
            })
            .to_string(),
        ),
    )
    .await;
    assert_eq!(status, 409);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "User already exists");
}

#[tokio::test]
async fn register_then_me_round_trips_the_new_user() {
    let addr = spawn_server().await;

    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/register",
        &[],
        Some(
            &json!({
                "username": "newbie",
                "email": "newbie@example.com",
                "password": "pw",
                "firstName": "New",
                "lastName": "Farmer",
                "role": "farmer"
            })
            .to_string(),
        ),
    )
    .await;
    assert_eq!(status, 201);
    let created: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(created["message"], "User created successfully");
    assert_eq!(created["user"]["id"], 3);
    assert!(
        created["user"].get("passwordHash").is_none(),
        "hashes never leave the server"
    );

    let (status, _, body) = send_with_headers(
        addr,
        "POST",
        "/api/auth/login",
        &[],
        Some(r#"{"email":"newbie@example.com","password":"pw"}"#),
    )
    .await;
    assert_eq!(status, 200);
    let login: Value = serde_json::from_str(&body).expect("json");
    let token = login["token"].as_str().expect("token");

    let (status, _, body) = send_with_headers(
        addr,
        "GET",
        "/api/auth/me",
        &[("authorization", &format!("Bearer {token}"))],
        None,
    )
    .await;
    assert_eq!(status, 200);
    let me: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(me["username"], "newbie");
    assert_eq!(me["role"], "farmer");
}

#[tokio::test]
async fn me_without_token_is_401() {
    let addr = spawn_server().await;
    let (status, _, body) = send_with_headers(addr, "GET", "/api/auth/me", &[], None).await;
    assert_eq!(status, 401);
    let err: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(err["message"], "No token provided");
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let addr = spawn_server().await;
    let (status, head, body) =
        send_with_headers(addr, "POST", "/api/auth/logout", &[], None).await;
    assert_eq!(status, 200);
    let msg: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(msg["message"], "Logout successful");
    let head = head.to_ascii_lowercase();
    assert!(head.contains("set-cookie: auth-token=;"));
    assert!(head.contains("max-age=0"));
}
