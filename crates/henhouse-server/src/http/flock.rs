// SPDX-License-Identifier: Apache-2.0

//! `/api/inventory`: poultry batches.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, MessageResponse, PoultryBatchPayload};
use henhouse_model::PoultryBatch;
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_payload(body: &Bytes) -> Result<PoultryBatchPayload, ApiError> {
    let payload: PoultryBatchPayload = decode_body(body)?;
    validate_date("purchaseDate", &payload.purchase_date)?;
    Ok(payload)
}

fn apply(record: &mut PoultryBatch, payload: PoultryBatchPayload) {
    record.bird_type = payload.bird_type;
    record.breed = payload.breed;
    record.current_count = payload.current_count;
    record.age_weeks = payload.age_weeks;
    record.purchase_date = payload.purchase_date;
    record.purchase_price = payload.purchase_price;
    // Omitted on the wire means zero, for create and update alike.
    record.mortality_count = payload.mortality_count.unwrap_or(0);
}

pub(crate) async fn list_inventory_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.batches.list())).into_response();
    finish(&state, "/api/inventory", started, &request_id, resp).await
}

pub(crate) async fn create_inventory_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/inventory";

    let resp = match parse_payload(&body) {
        Ok(payload) => {
            let mut record = PoultryBatch {
                id: 0,
                bird_type: String::new(),
                breed: String::new(),
                current_count: 0,
                age_weeks: 0,
                purchase_date: String::new(),
                purchase_price: 0.0,
                mortality_count: 0,
                created_at: String::new(),
            };
            apply(&mut record, payload);
            let created = state.db.batches.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_inventory_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/inventory/:id";

    let resp = match parse_payload(&body) {
        Ok(payload) => match state.db.batches.update(id, |row| apply(row, payload)) {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Item not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_inventory_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/inventory/:id";

    let resp = if state.db.batches.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Item deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Item not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}
