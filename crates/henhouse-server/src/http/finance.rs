// SPDX-License-Identifier: Apache-2.0

//! `/api/sales` and `/api/expenses`.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use henhouse_api::{ApiError, ExpensePayload, MessageResponse, SalePayload};
use henhouse_model::{Expense, Sale};
use henhouse_store::now_timestamp;

use crate::http::handlers::{
    api_error_response, decode_body, finish, propagated_request_id, validate_date,
};
use crate::AppState;

fn parse_sale_payload(body: &Bytes) -> Result<SalePayload, ApiError> {
    let payload: SalePayload = decode_body(body)?;
    validate_date("saleDate", &payload.sale_date)?;
    Ok(payload)
}

fn apply_sale(record: &mut Sale, payload: SalePayload) {
    let total = payload
        .total_amount
        .unwrap_or(payload.quantity as f64 * payload.unit_price);
    record.sale_date = payload.sale_date;
    record.product_type = payload.product_type;
    record.quantity = payload.quantity;
    record.unit_price = payload.unit_price;
    record.total_amount = total;
    record.customer_name = payload.customer_name;
    record.customer_contact = payload.customer_contact.unwrap_or_default();
    record.payment_status = payload.payment_status;
}

fn parse_expense_payload(body: &Bytes) -> Result<ExpensePayload, ApiError> {
    let payload: ExpensePayload = decode_body(body)?;
    validate_date("expenseDate", &payload.expense_date)?;
    Ok(payload)
}

fn apply_expense(record: &mut Expense, payload: ExpensePayload) {
    record.expense_date = payload.expense_date;
    record.category = payload.category;
    record.description = payload.description.unwrap_or_default();
    record.amount = payload.amount;
    record.supplier = payload.supplier.unwrap_or_default();
    record.receipt_number = payload.receipt_number.unwrap_or_default();
}

pub(crate) async fn list_sales_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let rows = state
        .db
        .sales
        .list_sorted_by(|a, b| b.sale_date.cmp(&a.sale_date));
    let resp = (StatusCode::OK, Json(rows)).into_response();
    finish(&state, "/api/sales", started, &request_id, resp).await
}

pub(crate) async fn create_sale_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/sales";

    let resp = match parse_sale_payload(&body) {
        Ok(payload) => {
            let mut record = Sale {
                id: 0,
                sale_date: String::new(),
                product_type: String::new(),
                quantity: 0,
                unit_price: 0.0,
                total_amount: 0.0,
                customer_name: String::new(),
                customer_contact: String::new(),
                payment_status: String::new(),
                created_at: String::new(),
            };
            apply_sale(&mut record, payload);
            let created = state.db.sales.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_sale_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/sales/:id";

    let resp = match parse_sale_payload(&body) {
        Ok(payload) => match state.db.sales.update(id, |row| apply_sale(row, payload)) {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Sale not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_sale_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/sales/:id";

    let resp = if state.db.sales.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Sale deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Sale not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn list_expenses_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let rows = state
        .db
        .expenses
        .list_sorted_by(|a, b| b.expense_date.cmp(&a.expense_date));
    let resp = (StatusCode::OK, Json(rows)).into_response();
    finish(&state, "/api/expenses", started, &request_id, resp).await
}

pub(crate) async fn create_expense_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/expenses";

    let resp = match parse_expense_payload(&body) {
        Ok(payload) => {
            let mut record = Expense {
                id: 0,
                expense_date: String::new(),
                category: String::new(),
                description: String::new(),
                amount: 0.0,
                supplier: String::new(),
                receipt_number: String::new(),
                created_at: String::new(),
            };
            apply_expense(&mut record, payload);
            let created = state.db.expenses.insert(record, now_timestamp());
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn update_expense_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/expenses/:id";

    let resp = match parse_expense_payload(&body) {
        Ok(payload) => match state
            .db
            .expenses
            .update(id, |row| apply_expense(row, payload))
        {
            Some(updated) => (StatusCode::OK, Json(updated)).into_response(),
            None => api_error_response(
                StatusCode::NOT_FOUND,
                ApiError::not_found("Expense not found", id).with_request_id(&request_id),
            ),
        },
        Err(err) => {
            api_error_response(StatusCode::BAD_REQUEST, err.with_request_id(&request_id))
        }
    };
    finish(&state, route, started, &request_id, resp).await
}

pub(crate) async fn delete_expense_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/api/expenses/:id";

    let resp = if state.db.expenses.remove(id) {
        (
            StatusCode::OK,
            Json(MessageResponse::new("Expense deleted successfully")),
        )
            .into_response()
    } else {
        api_error_response(
            StatusCode::NOT_FOUND,
            ApiError::not_found("Expense not found", id).with_request_id(&request_id),
        )
    };
    finish(&state, route, started, &request_id, resp).await
}
