//! Metric normalizers: map one raw metric onto the shared 0–100 scale.
//!
//! One helper per rule family. Every output is clamped to [0, 100] here,
//! at the leaf, so the weighted combinations above (whose weights sum to
//! 1.0) stay on the scale without re-clamping. All helpers return a
//! finite number for any finite, non-negative input.

/// Clamp onto the score scale.
#[inline]
pub(crate) fn clamp_score(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

/// Linear progress toward a goal, capped at 100. No reward past target.
pub fn linear_to_target(value: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    clamp_score(value / target * 100.0)
}

/// 100 inside the ideal band, linear decay outside it, floored at 0.
/// Under- and overshoot decay at independent rates (points per unit).
pub fn band_centered(value: f64, lo: f64, hi: f64, under_rate: f64, over_rate: f64) -> f64 {
    if value < lo {
        clamp_score(100.0 - (lo - value) * under_rate)
    } else if value > hi {
        clamp_score(100.0 - (value - hi) * over_rate)
    } else {
        100.0
    }
}

/// Score 50 at the baseline, moving `per_unit` points for each unit of
/// deviation, clamped. Used for resting heart rate against its baseline.
pub fn baseline_offset(value: f64, baseline: f64, per_unit: f64) -> f64 {
    clamp_score(50.0 + (value - baseline) * per_unit)
}

/// Quality ladder for categorical self-ratings. Recognizes the store's
/// labels (优/良/中/差) and their English equivalents; anything else
/// falls back to the mid tier (60) instead of failing.
pub fn quality_ladder(label: &str) -> f64 {
    match label.trim().to_ascii_lowercase().as_str() {
        "优" | "excellent" => 100.0,
        "良" | "good" => 80.0,
        "中" | "medium" => 60.0,
        "差" | "poor" => 40.0,
        _ => 60.0,
    }
}

/// A 0–10 self-rating stretched onto the 0–100 scale.
pub fn direct_scale(rating: f64) -> f64 {
    clamp_score(rating * 10.0)
}

/// Ratio of `num` to `den` scaled by `scale`, capped at 100.
/// A zero (or negative) denominator yields 0, never NaN or infinity.
pub fn ratio_score(num: f64, den: f64, scale: f64) -> f64 {
    if den <= 0.0 {
        return 0.0;
    }
    clamp_score(num / den * scale)
}

/// Linear penalty past a threshold: full score up to `threshold`, then
/// `per_unit` points lost per unit of overage, floored at 0.
pub fn inverse_penalty(value: f64, threshold: f64, per_unit: f64) -> f64 {
    clamp_score(100.0 - (value - threshold) * per_unit)
}
