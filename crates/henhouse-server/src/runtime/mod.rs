// SPDX-License-Identifier: Apache-2.0

use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use henhouse_store::MockDb;

use crate::auth::TokenSigner;
use crate::config::ApiConfig;
use crate::http::{
    auth_routes, clients, feed, finance, flock, handlers, health_records, production, reminders,
    reports, settings, staff,
};
use crate::middleware::{cors_middleware, require_auth, security_middleware};
use crate::telemetry::{self, RequestMetrics};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<MockDb>,
    pub api: ApiConfig,
    pub signer: Arc<TokenSigner>,
    pub metrics: Arc<RequestMetrics>,
    pub request_id_seed: Arc<AtomicU64>,
    pub ready: Arc<AtomicBool>,
    pub accepting_requests: Arc<AtomicBool>,
}

impl AppState {
    #[must_use]
    pub fn new(db: Arc<MockDb>) -> Self {
        Self::with_config(db, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(db: Arc<MockDb>, api: ApiConfig) -> Self {
        let signer = Arc::new(TokenSigner::new(
            api.token_secret.clone(),
            api.token_ttl_secs,
        ));
        Self {
            db,
            signer,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
            ready: Arc::new(AtomicBool::new(true)),
            accepting_requests: Arc::new(AtomicBool::new(true)),
            api,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Everything here requires a valid session token.
    let protected = Router::new()
        .route(
            "/api/inventory",
            get(flock::list_inventory_handler).post(flock::create_inventory_handler),
        )
        .route(
            "/api/inventory/:id",
            put(flock::update_inventory_handler).delete(flock::delete_inventory_handler),
        )
        .route(
            "/api/feed/inventory",
            get(feed::list_feed_items_handler).post(feed::create_feed_item_handler),
        )
        .route(
            "/api/feed/inventory/:id",
            put(feed::update_feed_item_handler).delete(feed::delete_feed_item_handler),
        )
        .route(
            "/api/feed/consumption",
            get(feed::list_consumption_handler).post(feed::create_consumption_handler),
        )
        .route(
            "/api/health",
            get(health_records::list_health_handler).post(health_records::create_health_handler),
        )
        .route(
            "/api/health/:id",
            put(health_records::update_health_handler)
                .delete(health_records::delete_health_handler),
        )
        .route(
            "/api/production",
            get(production::list_production_handler).post(production::create_production_handler),
        )
        .route(
            "/api/production/:id",
            put(production::update_production_handler)
                .delete(production::delete_production_handler),
        )
        .route(
            "/api/sales",
            get(finance::list_sales_handler).post(finance::create_sale_handler),
        )
        .route(
            "/api/sales/:id",
            put(finance::update_sale_handler).delete(finance::delete_sale_handler),
        )
        .route(
            "/api/expenses",
            get(finance::list_expenses_handler).post(finance::create_expense_handler),
        )
        .route(
            "/api/expenses/:id",
            put(finance::update_expense_handler).delete(finance::delete_expense_handler),
        )
        .route(
            "/api/employees",
            get(staff::list_employees_handler).post(staff::create_employee_handler),
        )
        .route(
            "/api/employees/:id",
            put(staff::update_employee_handler).delete(staff::delete_employee_handler),
        )
        .route(
            "/api/employees/payments",
            get(staff::list_payments_handler).post(staff::create_payment_handler),
        )
        .route(
            "/api/clients",
            get(clients::list_clients_handler).post(clients::create_client_handler),
        )
        .route(
            "/api/clients/:id",
            put(clients::update_client_handler).delete(clients::delete_client_handler),
        )
        .route(
            "/api/reminders",
            get(reminders::list_reminders_handler).post(reminders::create_reminder_handler),
        )
        .route(
            "/api/reminders/:id",
            put(reminders::update_reminder_handler).delete(reminders::delete_reminder_handler),
        )
        .route(
            "/api/reminders/:id/complete",
            put(reminders::complete_reminder_handler),
        )
        .route(
            "/api/settings",
            get(settings::get_settings_handler).put(settings::update_settings_handler),
        )
        .route("/api/reports", get(reports::reports_handler))
        .route("/api/dashboard/stats", get(reports::dashboard_stats_handler))
        .layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(handlers::landing_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .route("/readyz", get(handlers::readyz_handler))
        .route("/metrics", get(telemetry::metrics_handler))
        .route("/version", get(handlers::version_handler))
        .route("/api/auth/login", post(auth_routes::login_handler))
        .route("/api/auth/register", post(auth_routes::register_handler))
        .route("/api/auth/me", get(auth_routes::me_handler))
        .route("/api/auth/logout", post(auth_routes::logout_handler))
        .merge(protected)
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .layer(from_fn_with_state(state.clone(), security_middleware))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
