// SPDX-License-Identifier: Apache-2.0

//! `/api/settings`: single per-farm document, PUT merges at section level.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_model::SettingsPatch;

use crate::http::handlers::{api_error_response, decode_body, finish, propagated_request_id};
use crate::AppState;

pub(crate) async fn get_settings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.settings())).into_response();
    finish(&state, "/api/settings", started, &request_id, resp).await
}

pub(crate) async fn update_settings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/settings";

    let resp = match decode_body::<SettingsPatch>(&body) {
        Ok(patch) => {
            let merged = state.db.update_settings(patch);
            (StatusCode::OK, Json(merged)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}
