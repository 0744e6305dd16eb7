// src/ingest/scheduler.rs
use metrics::counter;
use tokio::task::JoinHandle;

use crate::api::AppState;
use crate::ingest::{self, snapshot_hash};

#[derive(Clone, Copy, Debug)]
pub struct RefreshSchedulerCfg {
    pub interval_secs: u64,
}

impl Default for RefreshSchedulerCfg {
    fn default() -> Self {
        Self { interval_secs: 300 }
    }
}

/// Spawn the background refresh loop: re-fetch, re-score, and publish
/// the report into shared state on every tick. A content hash of the
/// decoded data separates real changes from no-op refreshes in the
/// logs and metrics.
pub fn spawn_refresh_scheduler(state: AppState, cfg: RefreshSchedulerCfg) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(cfg.interval_secs));
        let mut last_hash: Option<String> = None;

        loop {
            ticker.tick().await;

            let source = state.source();
            let report = ingest::refresh_report(source.as_deref()).await;
            let hash = snapshot_hash(&report.snapshot);
            let changed = last_hash.as_deref() != Some(hash.as_str());
            if changed {
                counter!("dashboard_snapshot_changes_total").increment(1);
            }
            last_hash = Some(hash);

            tracing::info!(
                target: "refresh",
                composite = report.scores.composite_index,
                status = report.scores.status.label(),
                degraded = report.snapshot.degraded,
                changed,
                "refresh tick"
            );

            state.publish(report);
        }
    })
}
