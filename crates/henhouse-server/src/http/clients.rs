// SPDX-License-Identifier: Apache-2.0

//! `/api/clients`: egg buyers.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, ClientPayload, MessageResponse};
use henhouse_model::Client;
use henhouse_store::now_timestamp;

use crate::http::handlers::{api_error_response, decode_body, finish, propagated_request_id};
use crate::AppState;

fn apply(record: &mut Client, payload: ClientPayload) {
    record.client_name = payload.client_name;
    record.contact_person = payload.contact_person.unwrap_or_default();
    record.phone = payload.phone.unwrap_or_default();
    record.email = payload.email.unwrap_or_default();
    record.address = payload.address.unwrap_or_default();
    record.client_type = payload.client_type;
    record.credit_limit = payload.credit_limit;
    record.outstanding_balance = payload.outstanding_balance;
}

pub(crate) async fn list_clients_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.clients.list())).into_response();
    finish(&state, "/api/clients", started, &request_id, resp).await
}

pub(crate) async fn create_client_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/clients";

    let resp = match decode_body::<ClientPayload>(&body) {
        Ok(payload) => {
            let mut record = Client {
                id: 0,
                client_name: String::new(),
                contact_person: String::new(),
                phone: String::new(),
                email: String::new(),
                address: String::new(),
                client_type: String::new(),
                credit_limit: 0.0,
                outstanding_balance: 0.0,
                created_at: String::new(),
            };
            apply(&mut record, payload);
            let created = state.db.clients.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_client_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/clients/:id";

    let resp = match decode_body::<ClientPayload>(&body) {
        Ok(payload) => match state.db.clients.update(id, |row| apply(row, payload)) {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Client not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_client_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/clients/:id";

    let resp = if state.db.clients.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Client deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Client not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}
