// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod assets;
pub mod config;
pub mod history;
pub mod insights;
pub mod metrics;

// Retrieval pipeline (Notion source, decoding, fallback, scheduler)
pub mod ingest;

// Scoring engine (normalizers, category scorers, composite index, status)
pub mod score;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::ingest::{refresh_report, DashboardReport};
pub use crate::score::{compute_all, ScoreReport, StatusBand};
