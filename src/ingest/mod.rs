// src/ingest/mod.rs
//! Retrieval pipeline: fetch the four category record sets
//! concurrently, decode the newest record of each, and score the
//! result. Retrieval is all-or-nothing: any failed category swaps in
//! the fallback dataset wholesale so the scorer never sees a partial
//! feed.

pub mod decode;
pub mod fallback;
pub mod notion;
pub mod scheduler;
pub mod types;

use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::assets::{AssetSnapshot, Category};
use crate::ingest::types::RecordSource;
use crate::score::{self, status, ScoreReport};

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("dashboard_refresh_total", "Refresh cycles started.");
        describe_counter!(
            "dashboard_retrieval_errors_total",
            "Category fetch/parse errors."
        );
        describe_counter!(
            "dashboard_fallback_total",
            "Refreshes that substituted the fallback dataset."
        );
        describe_counter!(
            "dashboard_records_total",
            "Raw records parsed from the store."
        );
        describe_histogram!("dashboard_parse_ms", "Response parse time in milliseconds.");
        describe_gauge!(
            "dashboard_last_refresh_ts",
            "Unix ts when the report was last recomputed."
        );
        describe_gauge!("dashboard_composite_index", "Latest composite index (PEI).");
    });
}

/// Everything the dashboard shell serves for one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub snapshot: AssetSnapshot,
    pub scores: ScoreReport,
    pub advice: String,
}

impl DashboardReport {
    pub fn from_snapshot(snapshot: AssetSnapshot) -> Self {
        let scores = score::compute_all(&snapshot);
        let advice = status::advice(scores.composite_index).to_string();
        Self {
            generated_at: snapshot.fetched_at,
            snapshot,
            scores,
            advice,
        }
    }
}

/// Fetch all four categories concurrently and decode the newest record
/// of each. Any failure degrades to the fallback dataset wholesale.
pub async fn fetch_snapshot(source: &dyn RecordSource) -> AssetSnapshot {
    ensure_metrics_described();
    let now = Utc::now();

    let (health, cognitive, content, focus) = tokio::join!(
        source.fetch_latest(Category::Health),
        source.fetch_latest(Category::Cognitive),
        source.fetch_latest(Category::Content),
        source.fetch_latest(Category::Focus),
    );

    match (health, cognitive, content, focus) {
        (Ok(health), Ok(cognitive), Ok(content), Ok(focus)) => AssetSnapshot {
            health: decode::decode_latest_health(&health),
            cognitive: decode::decode_latest_cognitive(&cognitive),
            content: decode::decode_latest_content(&content),
            focus: decode::decode_latest_focus(&focus),
            fetched_at: now,
            degraded: false,
        },
        (h, c, ct, f) => {
            let failed: Vec<&str> = [
                (h.is_err(), Category::Health),
                (c.is_err(), Category::Cognitive),
                (ct.is_err(), Category::Content),
                (f.is_err(), Category::Focus),
            ]
            .iter()
            .filter(|(err, _)| *err)
            .map(|(_, cat)| cat.name())
            .collect();
            tracing::warn!(
                source = source.name(),
                failed = ?failed,
                "retrieval failed, substituting fallback dataset"
            );
            counter!("dashboard_fallback_total").increment(1);
            fallback::snapshot(now)
        }
    }
}

/// Run one refresh cycle: retrieve (or fall back) and score. `None`
/// means no source is configured; the service then reports the
/// fallback dataset explicitly instead of making doomed calls.
pub async fn refresh_report(source: Option<&dyn RecordSource>) -> DashboardReport {
    ensure_metrics_described();
    counter!("dashboard_refresh_total").increment(1);

    let snapshot = match source {
        Some(src) => fetch_snapshot(src).await,
        None => {
            counter!("dashboard_fallback_total").increment(1);
            fallback::snapshot(Utc::now())
        }
    };

    let report = DashboardReport::from_snapshot(snapshot);
    gauge!("dashboard_last_refresh_ts").set(report.generated_at.timestamp() as f64);
    gauge!("dashboard_composite_index").set(report.scores.composite_index);
    report
}

/// Content hash of the decoded category data, ignoring provenance, so
/// consecutive refreshes can be compared for actual change.
pub fn snapshot_hash(snapshot: &AssetSnapshot) -> String {
    let mut hasher = Sha256::new();
    // Category data only; fetched_at would make every refresh "new".
    for part in [
        serde_json::to_vec(&snapshot.health),
        serde_json::to_vec(&snapshot.cognitive),
        serde_json::to_vec(&snapshot.content),
        serde_json::to_vec(&snapshot.focus),
    ] {
        hasher.update(part.unwrap_or_default());
    }
    format!("{:x}", hasher.finalize())
}
