// SPDX-License-Identifier: Apache-2.0

//! `/api/reminders`: task reminders, soonest first, with an optional
//! `?status=` filter (pending | completed | overdue | all).

use std::collections::HashMap;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use henhouse_api::{
    parse_reminder_filter, ApiError, CompleteReminderPayload, MessageResponse, ReminderFilter,
    ReminderPayload,
};
use henhouse_model::Reminder;
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_payload(body: &Bytes) -> Result<ReminderPayload, ApiError> {
    let payload: ReminderPayload = decode_body(body)?;
    validate_date("reminderDate", &payload.reminder_date)?;
    Ok(payload)
}

fn apply(record: &mut Reminder, payload: ReminderPayload) {
    record.title = payload.title;
    record.description = payload.description.unwrap_or_default();
    record.reminder_date = payload.reminder_date;
    record.reminder_type = payload.reminder_type;
}

pub(crate) async fn list_reminders_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/reminders";

    let filter = match parse_reminder_filter(&params) {
        Ok(filter) => filter,
        Err(err) => {
            let resp =
                api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id));
            return finish(&state, route, started, &request_id, resp).await;
        }
    };
    let today = Utc::now().date_naive();
    let mut rows = state
        .db
        .reminders
        .list_sorted_by(|a, b| a.reminder_date.cmp(&b.reminder_date));
    if let ReminderFilter::Status(wanted) = filter {
        rows.retain(|r| r.status(today) == wanted);
    }
    let resp = (StatusCode::OK, Json(rows)).into_response();
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn create_reminder_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/reminders";

    let resp = match parse_payload(&body) {
        Ok(payload) => {
            let mut record = Reminder {
                id: 0,
                title: String::new(),
                description: String::new(),
                reminder_date: String::new(),
                reminder_type: String::new(),
                is_completed: false,
                created_at: String::new(),
            };
            apply(&mut record, payload);
            let created = state.db.reminders.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_reminder_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/reminders/:id";

    let resp = match parse_payload(&body) {
        Ok(payload) => match state.db.reminders.update(id, |row| apply(row, payload)) {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Reminder not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

/// Toggles only the completion flag, leaving the rest of the reminder as the
/// dashboard last saved it.
pub(crate) async fn complete_reminder_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/reminders/:id/complete";

    let resp = match decode_body::<CompleteReminderPayload>(&body) {
        Ok(payload) => match state
            .db
            .reminders
            .update(id, |row| row.is_completed = payload.is_completed)
        {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Reminder not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_reminder_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/reminders/:id";

    let resp = if state.db.reminders.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Reminder deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Reminder not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}
