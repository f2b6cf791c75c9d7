// SPDX-License-Identifier: Apache-2.0

//! Auth family: login, register, me, logout. These routes sit outside the
//! token gate; `me` checks its own token so it can answer 401 precisely.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use henhouse_api::{
    ApiError, ApiErrorCode, LoginPayload, LoginResponse, MessageResponse, RegisterPayload,
    RegisterResponse,
};
use henhouse_model::{Role, User};
use henhouse_store::{hash_password, now_timestamp};

use crate::auth::extract_token;
use crate::http::handlers::{api_error_response, decode_body, finish, propagated_request_id};
use crate::AppState;

fn set_auth_cookie(mut resp: Response, token: &str, max_age_secs: u64) -> Response {
    let cookie = format!("auth-token={token}; HttpOnly; Path=/; Max-Age={max_age_secs}; SameSite=Lax");
    if let Ok(v) = HeaderValue::from_str(&cookie) {
        resp.headers_mut().insert("set-cookie", v);
    }
    resp
}

pub(crate) async fn login_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/auth/login";

    let payload: LoginPayload = match decode_body(&body) {
        Ok(p) => p,
        Err(err) => {
            let resp =
                api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id));
            return finish(&state, route, started, &request_id, resp).await;
        }
    };
    let (Some(email), Some(_password)) = (payload.email, payload.password) else {
        let err = ApiError::new(
            ApiErrorCode::MissingField,
            "Email and password are required",
            serde_json::json!({}),
        )
        .with_request_id(&request_id);
        let resp = api_error_response(StatusCode::BAD_REQUEST, err);
        return finish(&state, route, started, &request_id, resp).await;
    };

    // Any password is accepted for a known active user; this is a demo
    // store, not a credential system.
    let Some(user) = state.db.users.find(|u| u.email == email && u.is_active) else {
        let err = ApiError::unauthorized("Invalid credentials").with_request_id(&request_id);
        let resp = api_error_response(StatusCode::UNAUTHORIZED, err);
        return finish(&state, route, started, &request_id, resp).await;
    };

    let resp = match state.signer.mint(&user, Utc::now().timestamp()) {
        Ok(token) => {
            let body = LoginResponse {
                message: "Login successful".to_string(),
                token: token.clone(),
                user,
            };
            set_auth_cookie(
                (StatusCode::OK, Json(body)).into_response(),
                &token,
                state.api.token_ttl_secs,
            )
        }
        Err(_) => api_error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::internal().with_request_id(&request_id),
        ),
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn register_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/auth/register";

    let payload: RegisterPayload = match decode_body(&body) {
        Ok(p) => p,
        Err(err) => {
            let resp =
                api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id));
            return finish(&state, route, started, &request_id, resp).await;
        }
    };
    let (Some(username), Some(email), Some(password), Some(first_name), Some(last_name)) = (
        payload.username,
        payload.email,
        payload.password,
        payload.first_name,
        payload.last_name,
    ) else {
        let err = ApiError::new(
            ApiErrorCode::MissingField,
            "Missing required fields",
            serde_json::json!({}),
        )
        .with_request_id(&request_id);
        let resp = api_error_response(StatusCode::BAD_REQUEST, err);
        return finish(&state, route, started, &request_id, resp).await;
    };

    if state
        .db
        .users
        .find(|u| u.email == email || u.username == username)
        .is_some()
    {
        let err = ApiError::conflict("User already exists").with_request_id(&request_id);
        let resp = api_error_response(StatusCode::CONFLICT, err);
        return finish(&state, route, started, &request_id, resp).await;
    }

    let role = payload
        .role
        .as_deref()
        .and_then(Role::parse)
        .unwrap_or(Role::Farmer);
    let user = state.db.users.insert(
        User {
            id: 0,
            username,
            email,
            password_hash: hash_password(&password),
            first_name,
            last_name,
            phone: payload.phone,
            role,
            is_active: true,
            created_at: String::new(),
        },
        now_timestamp(),
    );

    let body = RegisterResponse {
        message: "User created successfully".to_string(),
        user,
    };
    let resp = (StatusCode::CREATED, Json(body)).into_response();
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn me_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/auth/me";

    let Some(token) = extract_token(&headers) else {
        let err = ApiError::unauthorized("No token provided").with_request_id(&request_id);
        let resp = api_error_response(StatusCode::UNAUTHORIZED, err);
        return finish(&state, route, started, &request_id, resp).await;
    };
    let claims = match state.signer.verify(&token, Utc::now().timestamp()) {
        Ok(claims) => claims,
        Err(_) => {
            let err = ApiError::unauthorized("Invalid token").with_request_id(&request_id);
            let resp = api_error_response(StatusCode::UNAUTHORIZED, err);
            return finish(&state, route, started, &request_id, resp).await;
        }
    };
    let resp = match state.db.users.get(claims.user_id) {
        Some(user) => (StatusCode::OK, Json(user)).into_response(),
        None => api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("User not found", claims.user_id).with_request_id(&request_id),
        ),
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/auth/logout";

    let body = MessageResponse::new("Logout successful");
    let resp = set_auth_cookie((StatusCode::OK, Json(body)).into_response(), "", 0);
    finish(&state, route, started, &request_id, resp).await
}
