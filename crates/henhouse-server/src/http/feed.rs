// SPDX-License-Identifier: Apache-2.0

//! `/api/feed/inventory` and `/api/feed/consumption`.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, FeedConsumptionPayload, FeedItemPayload, MessageResponse};
use henhouse_model::{FeedConsumption, FeedItem};
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_item_payload(body: &Bytes) -> Result<FeedItemPayload, ApiError> {
    let payload: FeedItemPayload = decode_body(body)?;
    validate_date("purchaseDate", &payload.purchase_date)?;
    validate_date("expiryDate", &payload.expiry_date)?;
    Ok(payload)
}

fn apply_item(record: &mut FeedItem, payload: FeedItemPayload) {
    record.feed_type = payload.feed_type;
    record.quantity_kg = payload.quantity_kg;
    record.unit_price = payload.unit_price;
    record.supplier = payload.supplier;
    record.purchase_date = payload.purchase_date;
    record.expiry_date = payload.expiry_date;
}

pub(crate) async fn list_feed_items_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.feed_items.list())).into_response();
    finish(&state, "/api/feed/inventory", started, &request_id, resp).await
}

pub(crate) async fn create_feed_item_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/feed/inventory";

    let resp = match parse_item_payload(&body) {
        Ok(payload) => {
            let mut record = FeedItem {
                id: 0,
                feed_type: String::new(),
                quantity_kg: 0.0,
                unit_price: 0.0,
                supplier: String::new(),
                purchase_date: String::new(),
                expiry_date: String::new(),
                created_at: String::new(),
            };
            apply_item(&mut record, payload);
            let created = state.db.feed_items.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_feed_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/feed/inventory/:id";

    let resp = match parse_item_payload(&body) {
        Ok(payload) => match state.db.feed_items.update(id, |row| apply_item(row, payload)) {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Feed item not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_feed_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/feed/inventory/:id";

    let resp = if state.db.feed_items.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Feed item deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Feed item not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn list_consumption_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.feed_consumption.list())).into_response();
    finish(&state, "/api/feed/consumption", started, &request_id, resp).await
}

pub(crate) async fn create_consumption_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/feed/consumption";

    let resp = match decode_body::<FeedConsumptionPayload>(&body)
        .and_then(|p| validate_date("consumptionDate", &p.consumption_date).map(|()| p))
    {
        Ok(payload) => {
            // feedId is an informal reference; the type name is copied over
            // at create time and never kept in sync afterwards.
            let feed_type = state
                .db
                .feed_items
                .get(payload.feed_id)
                .map_or_else(|| "Unknown".to_string(), |item| item.feed_type);
            let record = FeedConsumption {
                id: 0,
                feed_id: payload.feed_id,
                consumption_date: payload.consumption_date,
                quantity_used: payload.quantity_used,
                notes: payload.notes.unwrap_or_default(),
                feed_type,
                created_at: String::new(),
            };
            let created = state.db.feed_consumption.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}
