//! # Scoring Engine
//! Pure pipeline from decoded asset data to the composite energy index
//! (PEI) and its status band. No I/O, no shared state, no randomness;
//! identical inputs always produce bit-identical reports.
//!
//! Shape: metric normalizers feed per-category component scores, the
//! four category totals combine into one weighted index, and the index
//! maps onto a discrete status band.

pub mod cognitive;
pub mod content;
pub mod focus;
pub mod health;
pub mod normalize;
pub mod status;

use serde::{Deserialize, Serialize};

use crate::assets::AssetSnapshot;

// Re-export convenient types.
pub use self::cognitive::CognitiveScore;
pub use self::content::ContentScore;
pub use self::focus::FocusScore;
pub use self::health::HealthScore;
pub use self::status::{classify, StatusBand};

// Composite index weights (sum to 1.0).
pub const W_HEALTH: f64 = 0.25;
pub const W_COGNITIVE: f64 = 0.30;
pub const W_CONTENT: f64 = 0.25;
pub const W_FOCUS: f64 = 0.20;

/// Full scoring output for one snapshot: per-category breakdowns, the
/// weighted composite index, and the status band it falls in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub health: HealthScore,
    pub cognitive: CognitiveScore,
    pub content: ContentScore,
    pub focus: FocusScore,
    pub composite_index: f64,
    pub status: StatusBand,
}

/// Single entry point for the reporting layer: scores all four
/// categories and derives the composite index and status band.
pub fn compute_all(snapshot: &AssetSnapshot) -> ScoreReport {
    let health = health::score(&snapshot.health);
    let cognitive = cognitive::score(&snapshot.cognitive);
    let content = content::score(&snapshot.content);
    let focus = focus::score(&snapshot.focus);

    let composite_index = composite_index(health.total, cognitive.total, content.total, focus.total);

    ScoreReport {
        health,
        cognitive,
        content,
        focus,
        composite_index,
        status: status::classify(composite_index),
    }
}

/// Weighted combination of the four category totals.
pub fn composite_index(health: f64, cognitive: f64, content: f64, focus: f64) -> f64 {
    health * W_HEALTH + cognitive * W_COGNITIVE + content * W_CONTENT + focus * W_FOCUS
}
