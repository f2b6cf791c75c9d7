// SPDX-License-Identifier: Apache-2.0

//! `/api/health`: treatments and vaccinations.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, HealthRecordPayload, MessageResponse};
use henhouse_model::HealthRecord;
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_payload(body: &Bytes) -> Result<HealthRecordPayload, ApiError> {
    let payload: HealthRecordPayload = decode_body(body)?;
    validate_date("treatmentDate", &payload.treatment_date)?;
    if let Some(due) = payload.next_due_date.as_deref() {
        validate_date("nextDueDate", due)?;
    }
    Ok(payload)
}

fn apply(record: &mut HealthRecord, payload: HealthRecordPayload) {
    record.treatment_type = payload.treatment_type;
    record.treatment_name = payload.treatment_name;
    record.treatment_date = payload.treatment_date;
    record.next_due_date = payload.next_due_date;
    record.notes = payload.notes.unwrap_or_default();
    record.cost = payload.cost;
}

pub(crate) async fn list_health_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.health_records.list())).into_response();
    finish(&state, "/api/health", started, &request_id, resp).await
}

pub(crate) async fn create_health_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/health";

    let resp = match parse_payload(&body) {
        Ok(payload) => {
            let mut record = HealthRecord {
                id: 0,
                treatment_type: String::new(),
                treatment_name: String::new(),
                treatment_date: String::new(),
                next_due_date: None,
                notes: String::new(),
                cost: 0.0,
                created_at: String::new(),
            };
            apply(&mut record, payload);
            let created = state.db.health_records.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_health_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/health/:id";

    let resp = match parse_payload(&body) {
        Ok(payload) => match state
            .db
            .health_records
            .update(id, |row| apply(row, payload))
        {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Health record not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_health_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/health/:id";

    let resp = if state.db.health_records.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Health record deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Health record not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}
