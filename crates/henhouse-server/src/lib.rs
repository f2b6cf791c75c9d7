// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! HTTP API server for the poultry-farm dashboard.
//!
//! Routes mirror the dashboard's `/api/*` surface over the in-memory store.
//! Everything except the auth family and the ops endpoints requires a valid
//! token.

pub mod auth;
pub mod config;
pub mod http;
pub mod middleware;
pub mod runtime;
pub mod telemetry;

pub use auth::{AuthClaims, AuthError, TokenSigner};
pub use config::ApiConfig;
pub use runtime::{build_router, AppState};
pub use telemetry::RequestMetrics;

pub const CRATE_NAME: &str = "henhouse-server";
