//! history.rs — in-memory log of computed reports for quick diagnostics.
//!
//! Display state only: entries do not feed any score (trend analysis is
//! deliberately not computed from them).

use std::sync::Mutex;

use serde::Serialize;

use crate::ingest::DashboardReport;
use crate::score::StatusBand;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub ts_unix: i64,
    pub composite_index: f64,
    pub status: StatusBand,
    pub health: f64,
    pub cognitive: f64,
    pub content: f64,
    pub focus: f64,
    pub degraded: bool,
}

#[derive(Debug)]
pub struct ScoreHistory {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl ScoreHistory {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, report: &DashboardReport) {
        let entry = HistoryEntry {
            ts_unix: report.generated_at.timestamp(),
            composite_index: report.scores.composite_index,
            status: report.scores.status,
            health: report.scores.health.total,
            cognitive: report.scores.cognitive.total,
            content: report.scores.content.total,
            focus: report.scores.focus.total,
            degraded: report.snapshot.degraded,
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let len = v.len();
        let start = len.saturating_sub(n);
        v[start..].to_vec()
    }
}
