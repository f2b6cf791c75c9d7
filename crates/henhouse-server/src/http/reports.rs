// SPDX-License-Identifier: Apache-2.0

//! `/api/reports` and `/api/dashboard/stats`: aggregates computed live from
//! the store.

use std::collections::HashMap;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use henhouse_api::parse_report_period;
use henhouse_store::{dashboard_stats, report_data};

use crate::http::handlers::{api_error_response, finish, propagated_request_id};
use crate::AppState;

pub(crate) async fn reports_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/reports";

    let resp = match parse_report_period(&params) {
        Ok(period) => {
            let today = Utc::now().date_naive();
            let data = report_data(&state.db, period.as_str(), today);
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn dashboard_stats_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let today = Utc::now().date_naive();
    let stats = dashboard_stats(&state.db, today);
    let resp = (StatusCode::OK, Json(stats)).into_response();
    finish(&state, "/api/dashboard/stats", started, &request_id, resp).await
}
