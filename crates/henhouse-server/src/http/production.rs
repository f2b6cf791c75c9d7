// SPDX-License-Identifier: Apache-2.0

//! `/api/production`: daily egg collection, newest day first.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, MessageResponse, ProductionPayload};
use henhouse_model::EggProduction;
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_payload(body: &Bytes) -> Result<ProductionPayload, ApiError> {
    let payload: ProductionPayload = decode_body(body)?;
    validate_date("productionDate", &payload.production_date)?;
    Ok(payload)
}

fn apply(record: &mut EggProduction, payload: ProductionPayload) {
    record.production_date = payload.production_date;
    record.eggs_collected = payload.eggs_collected;
    // Omitted on the wire means zero, for create and update alike.
    record.broken_eggs = payload.broken_eggs.unwrap_or(0);
    record.notes = payload.notes.unwrap_or_default();
}

pub(crate) async fn list_production_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let rows = state
        .db
        .productions
        .list_sorted_by(|a, b| b.production_date.cmp(&a.production_date));
    let resp = (StatusCode::OK, Json(rows)).into_response();
    finish(&state, "/api/production", started, &request_id, resp).await
}

pub(crate) async fn create_production_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/production";

    let resp = match parse_payload(&body) {
        Ok(payload) => {
            let mut record = EggProduction {
                id: 0,
                production_date: String::new(),
                eggs_collected: 0,
                broken_eggs: 0,
                notes: String::new(),
                created_at: String::new(),
            };
            apply(&mut record, payload);
            let created = state.db.productions.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_production_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/production/:id";

    let resp = match parse_payload(&body) {
        Ok(payload) => match state.db.productions.update(id, |row| apply(row, payload)) {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Production record not found", id)
                    .with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_production_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/production/:id";

    let resp = if state.db.productions.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new(
                "Production record deleted successfully",
            )),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Production record not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}
