//! Health asset scorer: exercise, sleep, and mindfulness components.

use serde::{Deserialize, Serialize};

use crate::assets::HealthData;
use crate::score::normalize::{
    band_centered, baseline_offset, direct_scale, linear_to_target, quality_ladder,
};

// Component weights (sum to 1.0).
pub const W_EXERCISE: f64 = 0.40;
pub const W_SLEEP: f64 = 0.35;
pub const W_MINDFULNESS: f64 = 0.25;

// Exercise: steps + heart rate + session duration.
const W_EX_STEPS: f64 = 0.3;
const W_EX_HEART_RATE: f64 = 0.4;
const W_EX_DURATION: f64 = 0.3;
const STEP_TARGET: f64 = 10_000.0;
const HEART_RATE_BASELINE: f64 = 72.0;
const HEART_RATE_PER_BPM: f64 = 2.0;
const EXERCISE_TARGET_MINUTES: f64 = 30.0;

// Sleep: duration + quality label + consistency placeholder.
const W_SLEEP_DURATION: f64 = 0.4;
const W_SLEEP_QUALITY: f64 = 0.4;
const W_SLEEP_CONSISTENCY: f64 = 0.2;
const SLEEP_IDEAL_LO_HOURS: f64 = 7.0;
const SLEEP_IDEAL_HI_HOURS: f64 = 9.0;
const SLEEP_UNDER_RATE: f64 = 20.0;
const SLEEP_OVER_RATE: f64 = 15.0;
/// Fixed placeholder until bedtime history is tracked.
const SLEEP_CONSISTENCY_PLACEHOLDER: f64 = 85.0;

// Mindfulness: frequency + duration + quality rating.
const W_MIND_FREQUENCY: f64 = 0.4;
const W_MIND_DURATION: f64 = 0.3;
const W_MIND_QUALITY: f64 = 0.3;
const MINDFULNESS_COUNT_TARGET: f64 = 5.0;
const MEDITATION_TARGET_MINUTES: f64 = 20.0;

/// Health component scores plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub exercise: f64,
    pub sleep: f64,
    pub mindfulness: f64,
    pub total: f64,
}

pub fn score(d: &HealthData) -> HealthScore {
    let exercise = exercise_score(d);
    let sleep = sleep_score(d);
    let mindfulness = mindfulness_score(d);
    HealthScore {
        exercise,
        sleep,
        mindfulness,
        total: exercise * W_EXERCISE + sleep * W_SLEEP + mindfulness * W_MINDFULNESS,
    }
}

pub fn exercise_score(d: &HealthData) -> f64 {
    let steps = linear_to_target(d.steps, STEP_TARGET);
    let heart_rate = baseline_offset(d.heart_rate, HEART_RATE_BASELINE, HEART_RATE_PER_BPM);
    let duration = linear_to_target(d.exercise_minutes, EXERCISE_TARGET_MINUTES);
    steps * W_EX_STEPS + heart_rate * W_EX_HEART_RATE + duration * W_EX_DURATION
}

pub fn sleep_score(d: &HealthData) -> f64 {
    let duration = band_centered(
        d.sleep_hours,
        SLEEP_IDEAL_LO_HOURS,
        SLEEP_IDEAL_HI_HOURS,
        SLEEP_UNDER_RATE,
        SLEEP_OVER_RATE,
    );
    let quality = quality_ladder(&d.sleep_quality);
    duration * W_SLEEP_DURATION
        + quality * W_SLEEP_QUALITY
        + SLEEP_CONSISTENCY_PLACEHOLDER * W_SLEEP_CONSISTENCY
}

pub fn mindfulness_score(d: &HealthData) -> f64 {
    let frequency = linear_to_target(d.mindfulness_count, MINDFULNESS_COUNT_TARGET);
    let duration = linear_to_target(d.meditation_minutes, MEDITATION_TARGET_MINUTES);
    let quality = direct_scale(d.meditation_quality);
    frequency * W_MIND_FREQUENCY + duration * W_MIND_DURATION + quality * W_MIND_QUALITY
}
