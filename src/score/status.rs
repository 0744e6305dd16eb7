//! Status classifier: maps the composite index onto discrete bands.
//!
//! Thresholds are evaluated highest-first; the first match wins. The
//! band is recomputed from scratch on every refresh, there are no
//! transitions to track.

use serde::{Deserialize, Serialize};

/// Discrete energy band for a composite index value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBand {
    Peak,
    Energetic,
    Good,
    NeedsAdjustment,
    NeedsRecovery,
}

impl StatusBand {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            StatusBand::Peak => "peak",
            StatusBand::Energetic => "energetic",
            StatusBand::Good => "good",
            StatusBand::NeedsAdjustment => "needs adjustment",
            StatusBand::NeedsRecovery => "needs recovery",
        }
    }
}

pub fn classify(index: f64) -> StatusBand {
    if index >= 90.0 {
        StatusBand::Peak
    } else if index >= 80.0 {
        StatusBand::Energetic
    } else if index >= 70.0 {
        StatusBand::Good
    } else if index >= 60.0 {
        StatusBand::NeedsAdjustment
    } else {
        StatusBand::NeedsRecovery
    }
}

/// Static action advice shown next to the index. Illustrative content,
/// not a derived metric.
pub fn advice(index: f64) -> &'static str {
    if index >= 85.0 {
        "Sleep and focus are in great shape - schedule one important creative task and one hard workout today"
    } else if index >= 70.0 {
        "Solid state - a good day for medium-intensity work and study"
    } else {
        "Energy is low - prioritize recovery and light activities"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_from_above() {
        assert_eq!(classify(90.0), StatusBand::Peak);
        assert_eq!(classify(89.999), StatusBand::Energetic);
        assert_eq!(classify(80.0), StatusBand::Energetic);
        assert_eq!(classify(79.999), StatusBand::Good);
        assert_eq!(classify(70.0), StatusBand::Good);
        assert_eq!(classify(69.999), StatusBand::NeedsAdjustment);
        assert_eq!(classify(60.0), StatusBand::NeedsAdjustment);
        assert_eq!(classify(59.999), StatusBand::NeedsRecovery);
        assert_eq!(classify(0.0), StatusBand::NeedsRecovery);
    }

    #[test]
    fn serializes_to_stable_snake_case() {
        let v = serde_json::to_value(StatusBand::NeedsAdjustment).unwrap();
        assert_eq!(v, serde_json::json!("needs_adjustment"));
        let v = serde_json::to_value(StatusBand::Peak).unwrap();
        assert_eq!(v, serde_json::json!("peak"));
    }

    #[test]
    fn advice_tiers_match_thresholds() {
        assert!(advice(92.0).contains("creative task"));
        assert!(advice(75.0).contains("Solid state"));
        assert!(advice(40.0).contains("recovery"));
    }
}
