// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    InvalidBody,
    MissingField,
    InvalidParameter,
    NotFound,
    Unauthorized,
    Conflict,
    RejectedByPolicy,
    Internal,
}

/// Error envelope. The dashboard contract keys off the top-level `message`;
/// `code`, `details`, and `request_id` ride along for operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: ApiErrorCode,
    pub details: Value,
    pub request_id: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            message: message.into(),
            code,
            details,
            request_id: "req-unknown".to_string(),
        }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = request_id.to_string();
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn invalid_body(reason: impl Into<String>) -> Self {
        Self::new(
            ApiErrorCode::InvalidBody,
            "Invalid request body",
            json!({"reason": reason.into()}),
        )
    }

    #[must_use]
    pub fn missing_field(name: &str) -> Self {
        Self::new(
            ApiErrorCode::MissingField,
            format!("{name} is required"),
            json!({"field": name}),
        )
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidParameter,
            format!("invalid query parameter: {name}"),
            json!({"parameter": name, "value": value}),
        )
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>, id: i64) -> Self {
        Self::new(ApiErrorCode::NotFound, message, json!({"id": id}))
    }

    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Unauthorized, message, json!({}))
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Conflict, message, json!({}))
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::new(ApiErrorCode::Internal, "Internal server error", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keeps_message_at_top_level() {
        let err = ApiError::not_found("Item not found", 7).with_request_id("req-1");
        let value = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(value["message"], "Item not found");
        assert_eq!(value["code"], "not_found");
        assert_eq!(value["details"]["id"], 7);
        assert_eq!(value["request_id"], "req-1");
    }
}
