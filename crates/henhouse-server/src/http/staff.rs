// SPDX-License-Identifier: Apache-2.0

//! `/api/employees` and `/api/employees/payments`.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, EmployeePayload, MessageResponse, PaymentPayload};
use henhouse_model::{Employee, Payment};
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_employee_payload(body: &Bytes) -> Result<EmployeePayload, ApiError> {
    let payload: EmployeePayload = decode_body(body)?;
    validate_date("hireDate", &payload.hire_date)?;
    Ok(payload)
}

fn apply_employee(record: &mut Employee, payload: EmployeePayload) {
    record.employee_name = payload.employee_name;
    record.position = payload.position;
    record.phone = payload.phone.unwrap_or_default();
    record.email = payload.email.unwrap_or_default();
    record.hire_date = payload.hire_date;
    record.salary = payload.salary;
    record.payment_frequency = payload.payment_frequency;
}

pub(crate) async fn list_employees_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let resp = (StatusCode::OK, Json(state.db.employees.list())).into_response();
    finish(&state, "/api/employees", started, &request_id, resp).await
}

pub(crate) async fn create_employee_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/employees";

    let resp = match parse_employee_payload(&body) {
        Ok(payload) => {
            let mut record = Employee {
                id: 0,
                employee_name: String::new(),
                position: String::new(),
                phone: String::new(),
                email: String::new(),
                hire_date: String::new(),
                salary: 0.0,
                payment_frequency: String::new(),
                is_active: true,
                created_at: String::new(),
            };
            apply_employee(&mut record, payload);
            let created = state.db.employees.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/employees/:id";

    let resp = match parse_employee_payload(&body) {
        Ok(payload) => match state
            .db
            .employees
            .update(id, |row| apply_employee(row, payload))
        {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Employee not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/employees/:id";

    let resp = if state.db.employees.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Employee deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Employee not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn list_payments_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let rows = state
        .db
        .payments
        .list_sorted_by(|a, b| b.payment_date.cmp(&a.payment_date));
    let resp = (StatusCode::OK, Json(rows)).into_response();
    finish(&state, "/api/employees/payments", started, &request_id, resp).await
}

pub(crate) async fn create_payment_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/employees/payments";

    let resp = match decode_body::<PaymentPayload>(&body)
        .and_then(|p| validate_date("paymentDate", &p.payment_date).map(|()| p))
    {
        Ok(payload) => {
            // employeeId is an informal reference; the name is copied over at
            // create time the same way feed consumption copies the feed type.
            let employee_name = state
                .db
                .employees
                .get(payload.employee_id)
                .map_or_else(|| "Unknown".to_string(), |e| e.employee_name);
            let record = Payment {
                id: 0,
                employee_id: payload.employee_id,
                employee_name,
                payment_date: payload.payment_date,
                amount: payload.amount,
                payment_period_start: payload.payment_period_start.unwrap_or_default(),
                payment_period_end: payload.payment_period_end.unwrap_or_default(),
                payment_method: payload.payment_method,
                notes: payload.notes.unwrap_or_default(),
                created_at: String::new(),
            };
            let created = state.db.payments.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}
