use std::sync::{Arc, RwLock};

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::assets::{AssetSnapshot, CognitiveData, ContentData, FocusData, HealthData};
use crate::history::ScoreHistory;
use crate::ingest::{self, DashboardReport};
use crate::ingest::types::RecordSource;
use crate::insights;
use crate::score::{self, ScoreReport};

const HISTORY_CAP: usize = 500;
const HISTORY_DEBUG_ROWS: usize = 10;

#[derive(Clone)]
pub struct AppState {
    latest: Arc<RwLock<DashboardReport>>,
    history: Arc<ScoreHistory>,
    source: Option<Arc<dyn RecordSource>>,
}

impl AppState {
    pub fn new(initial: DashboardReport, source: Option<Arc<dyn RecordSource>>) -> Self {
        let history = Arc::new(ScoreHistory::with_capacity(HISTORY_CAP));
        history.push(&initial);
        Self {
            latest: Arc::new(RwLock::new(initial)),
            history,
            source,
        }
    }

    /// State with no configured source: serves the fallback dataset and
    /// marks it degraded. Used by tests and by the binary when the
    /// Notion configuration is absent.
    pub fn offline() -> Self {
        let snapshot = ingest::fallback::snapshot(chrono::Utc::now());
        Self::new(DashboardReport::from_snapshot(snapshot), None)
    }

    /// Store a fresh report as the latest and log it to history.
    pub fn publish(&self, report: DashboardReport) {
        self.history.push(&report);
        let mut guard = self.latest.write().expect("report rwlock poisoned");
        *guard = report;
    }

    pub fn latest(&self) -> DashboardReport {
        self.latest.read().expect("report rwlock poisoned").clone()
    }

    pub fn source(&self) -> Option<Arc<dyn RecordSource>> {
        self.source.clone()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/report", get(latest_report))
        .route("/refresh", post(refresh_now))
        .route("/score", post(score_adhoc))
        .route("/insights", get(insights_out))
        .route("/debug/history", get(debug_history))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn latest_report(State(state): State<AppState>) -> Json<DashboardReport> {
    Json(state.latest())
}

/// Re-fetch and re-score on demand, publishing the result before
/// returning it.
async fn refresh_now(State(state): State<AppState>) -> Json<DashboardReport> {
    let source = state.source();
    let report = ingest::refresh_report(source.as_deref()).await;
    state.publish(report.clone());
    Json(report)
}

/// Caller-supplied category data scored without touching shared state.
/// Missing fields take their decoding defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ScoreRequest {
    health: HealthData,
    cognitive: CognitiveData,
    content: ContentData,
    focus: FocusData,
}

async fn score_adhoc(Json(body): Json<ScoreRequest>) -> Json<ScoreReport> {
    let snapshot = AssetSnapshot {
        health: body.health,
        cognitive: body.cognitive,
        content: body.content,
        focus: body.focus,
        fetched_at: chrono::Utc::now(),
        degraded: false,
    };
    Json(score::compute_all(&snapshot))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsOut {
    habits: Vec<HabitOut>,
    weekly: &'static insights::WeeklyInsights,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HabitOut {
    #[serde(flatten)]
    habit: insights::Habit,
    completion_pct: u8,
}

async fn insights_out() -> Json<InsightsOut> {
    let habits = insights::habits()
        .iter()
        .map(|h| HabitOut {
            habit: h.clone(),
            completion_pct: h.completion_pct(),
        })
        .collect();
    Json(InsightsOut {
        habits,
        weekly: insights::weekly(),
    })
}

async fn debug_history(State(state): State<AppState>) -> Json<Vec<crate::history::HistoryEntry>> {
    Json(state.history.snapshot_last_n(HISTORY_DEBUG_ROWS))
}
