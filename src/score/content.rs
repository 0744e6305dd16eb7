//! Content asset scorer: audience influence and production output.

use serde::{Deserialize, Serialize};

use crate::assets::ContentData;
use crate::score::normalize::{direct_scale, linear_to_target, ratio_score};

// Component weights (sum to 1.0).
pub const W_INFLUENCE: f64 = 0.4;
pub const W_PRODUCTION: f64 = 0.6;

// Influence: reach, engagement, and audience growth.
const W_IN_REACH: f64 = 0.3;
const W_IN_ENGAGEMENT: f64 = 0.25;
const W_IN_GROWTH: f64 = 0.25;
const W_IN_AUTHORITY: f64 = 0.2;
const VIEW_TARGET: f64 = 3_000.0;
/// Engagement is a small fraction of views; 10% engagement maxes out.
const ENGAGEMENT_SCALE: f64 = 1_000.0;
const FOLLOWER_TARGET: f64 = 200.0;

// Production: publishing cadence, quality, and idea conversion.
const W_PR_CONSISTENCY: f64 = 0.3;
const W_PR_QUALITY: f64 = 0.3;
const W_PR_CONVERSION: f64 = 0.4;
const PUBLISH_TARGET: f64 = 2.0;

/// Content component scores plus their weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentScore {
    pub influence: f64,
    pub production: f64,
    pub total: f64,
}

pub fn score(d: &ContentData) -> ContentScore {
    let influence = influence_score(d);
    let production = production_score(d);
    ContentScore {
        influence,
        production,
        total: influence * W_INFLUENCE + production * W_PRODUCTION,
    }
}

pub fn influence_score(d: &ContentData) -> f64 {
    let reach = linear_to_target(d.total_views, VIEW_TARGET);
    let engagement = ratio_score(d.total_engagement, d.total_views, ENGAGEMENT_SCALE);
    let growth = linear_to_target(d.new_followers, FOLLOWER_TARGET);
    let authority = direct_scale(d.professional_rating);
    reach * W_IN_REACH + engagement * W_IN_ENGAGEMENT + growth * W_IN_GROWTH + authority * W_IN_AUTHORITY
}

pub fn production_score(d: &ContentData) -> f64 {
    let consistency = linear_to_target(d.published_posts, PUBLISH_TARGET);
    let quality = direct_scale(d.content_quality);
    // Captured ideas that became published work; nothing captured scores 0.
    let conversion = ratio_score(d.ideas_converted, d.ideas_captured, 100.0);
    consistency * W_PR_CONSISTENCY + quality * W_PR_QUALITY + conversion * W_PR_CONVERSION
}
