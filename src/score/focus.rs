//! Focus asset scorer: flow state and digital hygiene.

use serde::{Deserialize, Serialize};

use crate::assets::FocusData;
use crate::score::normalize::{direct_scale, inverse_penalty, linear_to_target, ratio_score};

// Component weights (sum to 1.0).
pub const W_FLOW: f64 = 0.5;
pub const W_DIGITAL_HEALTH: f64 = 0.5;

// Flow: deep-work time, session count, and subjective quality.
const W_FL_TIME: f64 = 0.3;
const W_FL_SESSIONS: f64 = 0.2;
const W_FL_QUALITY: f64 = 0.5;
const FLOW_TARGET_HOURS: f64 = 3.0;
const FLOW_SESSION_TARGET: f64 = 2.0;

// Digital health: screen budget, productive share, interruptions, detox.
const W_DH_SCREEN: f64 = 0.25;
const W_DH_PRODUCTIVE: f64 = 0.25;
const W_DH_NOTIFICATIONS: f64 = 0.25;
const W_DH_DETOX: f64 = 0.25;
const SCREEN_BUDGET_HOURS: f64 = 6.0;
const SCREEN_PENALTY_PER_HOUR: f64 = 10.0;
const NOTIFICATION_PENALTY_EACH: f64 = 1.0;
const PHONE_FREE_TARGET_HOURS: f64 = 8.0;

/// Focus component scores plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusScore {
    pub flow: f64,
    pub digital_health: f64,
    pub total: f64,
}

pub fn score(d: &FocusData) -> FocusScore {
    let flow = flow_score(d);
    let digital_health = digital_health_score(d);
    FocusScore {
        flow,
        digital_health,
        total: flow * W_FLOW + digital_health * W_DIGITAL_HEALTH,
    }
}

pub fn flow_score(d: &FocusData) -> f64 {
    let time = linear_to_target(d.flow_hours, FLOW_TARGET_HOURS);
    let sessions = linear_to_target(d.flow_sessions, FLOW_SESSION_TARGET);
    let quality = direct_scale(d.flow_quality);
    time * W_FL_TIME + sessions * W_FL_SESSIONS + quality * W_FL_QUALITY
}

pub fn digital_health_score(d: &FocusData) -> f64 {
    let screen = inverse_penalty(d.screen_hours, SCREEN_BUDGET_HOURS, SCREEN_PENALTY_PER_HOUR);
    // Productive share of total screen time; no screen time scores 0.
    let productive = ratio_score(d.productive_hours, d.screen_hours, 100.0);
    let notifications = inverse_penalty(d.notifications, 0.0, NOTIFICATION_PENALTY_EACH);
    let detox = linear_to_target(d.phone_free_hours, PHONE_FREE_TARGET_HOURS);
    screen * W_DH_SCREEN
        + productive * W_DH_PRODUCTIVE
        + notifications * W_DH_NOTIFICATIONS
        + detox * W_DH_DETOX
}
