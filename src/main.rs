//! PEI Dashboard — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the Notion source, the refresh
//! scheduler, shared state, and middleware.
//!
//! See `README.md` for quickstart.

use std::sync::Arc;

use shuttle_axum::ShuttleAxum;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pei_dashboard::api::{self, AppState};
use pei_dashboard::config::DashboardConfig;
use pei_dashboard::ingest::{self, notion::NotionSource, scheduler};
use pei_dashboard::ingest::types::RecordSource;
use pei_dashboard::metrics::Metrics;

/// Enable compact tracing logs in development only.
/// Activation requires BOTH:
///   - dev environment (debug build OR SHUTTLE_ENV in {local, development, dev})
///   - DASHBOARD_DEV_LOG=1
fn enable_dev_tracing() {
    let dev_flag = std::env::var("DASHBOARD_DEV_LOG")
        .ok()
        .is_some_and(|v| v == "1");

    let is_dev_env = cfg!(debug_assertions)
        || matches!(
            std::env::var("SHUTTLE_ENV")
                .unwrap_or_default()
                .to_ascii_lowercase()
                .as_str(),
            "local" | "development" | "dev"
        );

    if !(dev_flag && is_dev_env) {
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("refresh=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn refresh_interval_secs() -> u64 {
    std::env::var("REFRESH_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300)
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments. This enables
    // NOTION_API_TOKEN / NOTION_*_DB_ID from .env.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    enable_dev_tracing();

    let interval = refresh_interval_secs();
    let metrics = Metrics::init(interval);

    // --- Build the record source from config; absent config means
    // offline mode (fallback dataset, degraded reports). ---
    let cfg = DashboardConfig::load_default().unwrap_or_else(|e| {
        tracing::warn!("dashboard config unreadable ({e:#}); falling back to env only");
        DashboardConfig::from_env()
    });
    let source: Option<Arc<dyn RecordSource>> = match NotionSource::from_config(&cfg) {
        Some(s) => Some(Arc::new(s)),
        None => {
            tracing::warn!("notion config incomplete; serving the fallback dataset");
            None
        }
    };

    // First report up-front so /report never serves an empty body.
    let initial = ingest::refresh_report(source.as_deref()).await;
    let state = AppState::new(initial, source);

    // Background refresh loop.
    let sched_cfg = scheduler::RefreshSchedulerCfg {
        interval_secs: interval,
    };
    scheduler::spawn_refresh_scheduler(state.clone(), sched_cfg);

    let router = api::router(state).merge(metrics.router());
    Ok(router.into())
}
