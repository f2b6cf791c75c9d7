// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tokio::sync::Mutex;

use crate::http::handlers::{make_request_id, with_request_id};
use crate::AppState;

const METRIC_SUBSYSTEM: &str = "henhouse";
const METRIC_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Default)]
pub struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
    policy_violations: Mutex<HashMap<String, u64>>,
}

impl RequestMetrics {
    pub async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_default()
            .push(latency.as_nanos() as u64);
    }

    pub async fn record_policy_violation(&self, policy: &str) {
        let mut by = self.policy_violations.lock().await;
        *by.entry(policy.to_string()).or_insert(0) += 1;
    }
}

fn percentile_ns(values: &[u64], pct: f64) -> u64 {
    if values.is_empty() {
        return 0;
    }
    let mut v = values.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64 - 1.0) * pct).round() as usize;
    v[idx]
}

/// Prometheus text exposition: request counts and p95 latency per route,
/// policy violation counts, and live store row counts.
pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let request_id = make_request_id(&state);
    let started = Instant::now();
    let mut body = String::new();

    let counts = state.metrics.counts.lock().await.clone();
    for ((route, status), count) in counts {
        body.push_str(&format!(
            "henhouse_http_requests_total{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",route=\"{route}\",status=\"{status}\"}} {count}\n"
        ));
    }
    let latency = state.metrics.latency_ns.lock().await.clone();
    for (route, vals) in latency {
        body.push_str(&format!(
            "henhouse_http_request_latency_p95_seconds{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",route=\"{route}\"}} {:.6}\n",
            percentile_ns(&vals, 0.95) as f64 / 1_000_000_000.0
        ));
    }
    let violations = state.metrics.policy_violations.lock().await.clone();
    for (policy, count) in violations {
        body.push_str(&format!(
            "henhouse_policy_violations_total{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",policy=\"{policy}\"}} {count}\n"
        ));
    }

    let rows: [(&str, usize); 12] = [
        ("inventory", state.db.batches.len()),
        ("feed_items", state.db.feed_items.len()),
        ("feed_consumption", state.db.feed_consumption.len()),
        ("health_records", state.db.health_records.len()),
        ("production", state.db.productions.len()),
        ("sales", state.db.sales.len()),
        ("expenses", state.db.expenses.len()),
        ("employees", state.db.employees.len()),
        ("payments", state.db.payments.len()),
        ("clients", state.db.clients.len()),
        ("reminders", state.db.reminders.len()),
        ("users", state.db.users.len()),
    ];
    for (collection, count) in rows {
        body.push_str(&format!(
            "henhouse_store_rows{{subsystem=\"{METRIC_SUBSYSTEM}\",version=\"{METRIC_VERSION}\",collection=\"{collection}\"}} {count}\n"
        ));
    }

    let resp: Response = (StatusCode::OK, body).into_response();
    state
        .metrics
        .observe_request("/metrics", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(resp, &request_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_empty_is_zero() {
        assert_eq!(percentile_ns(&[], 0.95), 0);
    }

    #[test]
    fn percentile_picks_the_upper_tail() {
        let values: Vec<u64> = (1..=100).collect();
        assert_eq!(percentile_ns(&values, 0.95), 95);
        assert_eq!(percentile_ns(&values, 0.5), 51);
    }

    #[tokio::test]
    async fn observe_request_accumulates_per_route_and_status() {
        let metrics = RequestMetrics::default();
        metrics
            .observe_request("/api/inventory", StatusCode::OK, Duration::from_millis(2))
            .await;
        metrics
            .observe_request("/api/inventory", StatusCode::OK, Duration::from_millis(3))
            .await;
        let counts = metrics.counts.lock().await;
        assert_eq!(counts.get(&("/api/inventory".to_string(), 200)), Some(&2));
    }
}
