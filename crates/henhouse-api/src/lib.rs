// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Wire-level API types: the error envelope, request payloads, response
//! shapes, and query-parameter parsing shared between server and tests.

mod errors;
mod params;
mod requests;
mod responses;

pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_reminder_filter, parse_report_period, ReminderFilter, ReportPeriod};
pub use requests::{
    ClientPayload, CompleteReminderPayload, EmployeePayload, ExpensePayload,
    FeedConsumptionPayload, FeedItemPayload, HealthRecordPayload, LoginPayload, PaymentPayload,
    PoultryBatchPayload, ProductionPayload, ReminderPayload, RegisterPayload, SalePayload,
};
pub use responses::{LoginResponse, MessageResponse, RegisterResponse};

pub const CRATE_NAME: &str = "henhouse-api";
