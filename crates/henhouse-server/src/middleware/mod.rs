// SPDX-License-Identifier: Apache-2.0

use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use henhouse_api::ApiError;
use tracing::info;

use crate::auth::extract_token;
use crate::http::handlers::api_error_response;
use crate::AppState;

pub(crate) fn normalized_header_value(
    headers: &HeaderMap,
    key: &str,
    max_len: usize,
) -> Option<String> {
    let raw = headers.get(key)?.to_str().ok()?.trim();
    if raw.is_empty() || raw.len() > max_len {
        return None;
    }
    Some(raw.to_string())
}

fn allow_origin(state: &AppState, origin: &str) -> bool {
    state.api.cors_allowed_origins.iter().any(|x| x == origin)
}

fn put_cors_headers(resp: &mut Response, origin: &str) {
    if let Ok(v) = HeaderValue::from_str(origin) {
        resp.headers_mut().insert("access-control-allow-origin", v);
    }
    // The grant is per-origin, so caches must key on it.
    resp.headers_mut()
        .insert("vary", HeaderValue::from_static("origin"));
    resp.headers_mut().insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
    );
    resp.headers_mut().insert(
        "access-control-allow-headers",
        HeaderValue::from_static("authorization,content-type,x-request-id"),
    );
    resp.headers_mut().insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
}

pub(crate) async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let origin = normalized_header_value(req.headers(), "origin", 256);
    if req.method() == axum::http::Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        if let Some(origin_value) = origin {
            if allow_origin(&state, &origin_value) {
                put_cors_headers(&mut resp, &origin_value);
            }
        }
        return resp;
    }

    let mut resp = next.run(req).await;
    if let Some(origin_value) = origin {
        if allow_origin(&state, &origin_value) {
            put_cors_headers(&mut resp, &origin_value);
        }
    }
    resp
}

/// Byte-size limits on the request line and headers, plus the optional audit
/// log line per request.
pub(crate) async fn security_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let uri_text = req.uri().to_string();
    if uri_text.len() > state.api.max_uri_bytes {
        state.metrics.record_policy_violation("uri_bytes").await;
        let err = ApiError::new(
            henhouse_api::ApiErrorCode::RejectedByPolicy,
            "request URI too large",
            serde_json::json!({"max_uri_bytes": state.api.max_uri_bytes, "actual": uri_text.len()}),
        );
        return api_error_response(StatusCode::BAD_REQUEST, err);
    }
    let header_bytes: usize = req
        .headers()
        .iter()
        .map(|(k, v)| k.as_str().len() + v.as_bytes().len())
        .sum();
    if header_bytes > state.api.max_header_bytes {
        state.metrics.record_policy_violation("header_bytes").await;
        let err = ApiError::new(
            henhouse_api::ApiErrorCode::RejectedByPolicy,
            "request headers too large",
            serde_json::json!({"max_header_bytes": state.api.max_header_bytes, "actual": header_bytes}),
        );
        return api_error_response(StatusCode::BAD_REQUEST, err);
    }

    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id =
        normalized_header_value(req.headers(), "x-request-id", 128).unwrap_or_default();
    let resp = next.run(req).await;
    if state.api.enable_audit_log {
        info!(
            target: "henhouse_audit",
            method = %method,
            path = %path,
            status = resp.status().as_u16(),
            request_id = %request_id,
            latency_ms = started.elapsed().as_millis() as u64,
            "audit"
        );
    }
    resp
}

/// Gate for the protected `/api/*` routes: presence and validity of the
/// session token only, no per-endpoint scoping.
pub(crate) async fn require_auth(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_token(req.headers()) else {
        state.metrics.record_policy_violation("auth_missing").await;
        return api_error_response(
            StatusCode::UNAUTHORIZED,
            ApiError::unauthorized("Authentication required"),
        );
    };
    if let Err(err) = state.signer.verify(&token, Utc::now().timestamp()) {
        state.metrics.record_policy_violation("auth_invalid").await;
        return api_error_response(
            StatusCode::UNAUTHORIZED,
            ApiError::unauthorized("Invalid or expired token")
                .with_details(serde_json::json!({"reason": err.to_string()})),
        );
    }
    next.run(req).await
}
