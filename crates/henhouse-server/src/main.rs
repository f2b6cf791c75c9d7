// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use std::env;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use henhouse_server::{build_router, ApiConfig, AppState};
use henhouse_store::MockDb;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_string_list(name: &str, default: &[&str]) -> Vec<String> {
    let raw = env::var(name).unwrap_or_default();
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        default.iter().map(|s| (*s).to_string()).collect()
    } else {
        items
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("HENHOUSE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("HENHOUSE_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let api_cfg = ApiConfig {
        max_body_bytes: env_usize("HENHOUSE_MAX_BODY_BYTES", 64 * 1024),
        max_uri_bytes: env_usize("HENHOUSE_MAX_URI_BYTES", 4 * 1024),
        max_header_bytes: env_usize("HENHOUSE_MAX_HEADER_BYTES", 16 * 1024),
        cors_allowed_origins: env_string_list(
            "HENHOUSE_CORS_ALLOWED_ORIGINS",
            &["http://localhost:3000"],
        ),
        enable_audit_log: env_bool("HENHOUSE_ENABLE_AUDIT_LOG", false),
        token_secret: env::var("HENHOUSE_TOKEN_SECRET")
            .unwrap_or_else(|_| "henhouse-dev-secret".to_string()),
        token_ttl_secs: env_u64("HENHOUSE_TOKEN_TTL_SECS", 24 * 60 * 60),
        seed_demo_data: env_bool("HENHOUSE_SEED_DEMO_DATA", true),
    };
    api_cfg.validate_startup_config_contract()?;

    let db = if api_cfg.seed_demo_data {
        Arc::new(MockDb::seeded())
    } else {
        Arc::new(MockDb::empty())
    };
    let state = AppState::with_config(db, api_cfg);
    let app = build_router(state.clone());

    let addr: std::net::SocketAddr = bind_addr
        .parse()
        .map_err(|e| format!("invalid bind addr {bind_addr}: {e}"))?;
    let socket = if addr.is_ipv4() {
        tokio::net::TcpSocket::new_v4().map_err(|e| format!("socket v4 failed: {e}"))?
    } else {
        tokio::net::TcpSocket::new_v6().map_err(|e| format!("socket v6 failed: {e}"))?
    };
    socket
        .set_reuseaddr(true)
        .map_err(|e| format!("set_reuseaddr failed: {e}"))?;
    socket
        .set_keepalive(env_bool("HENHOUSE_TCP_KEEPALIVE_ENABLED", true))
        .map_err(|e| format!("set_keepalive failed: {e}"))?;
    socket.bind(addr).map_err(|e| format!("bind failed: {e}"))?;
    let listener: TcpListener = socket
        .listen(1024)
        .map_err(|e| format!("listen failed: {e}"))?;
    info!("henhouse-server listening on {bind_addr}");

    let accepting = state.accepting_requests.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            // Flip readiness first so load balancers stop routing here,
            // then let in-flight requests drain.
            accepting.store(false, Ordering::Relaxed);
            let drain_ms = env_u64("HENHOUSE_SHUTDOWN_DRAIN_MS", 2000);
            tokio::time::sleep(Duration::from_millis(drain_ms)).await;
        })
        .await
        .map_err(|e| format!("server failed: {e}"))
}
