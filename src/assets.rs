//! # Asset Data Model
//! Decoded daily records for the four tracked asset categories
//! (Health, Cognitive, Content, Focus). One struct per category, all
//! fields defaulted so a sparse or missing record never blocks scoring.
//!
//! Values are immutable after decoding; scorers only ever read them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked life dimension, each backed by its own Notion database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Cognitive,
    Content,
    Focus,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Cognitive,
        Category::Content,
        Category::Focus,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Cognitive => "cognitive",
            Category::Content => "content",
            Category::Focus => "focus",
        }
    }
}

/// Neutral defaults for the categorical fields. The store records these
/// as select labels; an absent select falls back to the mid tier.
pub const DEFAULT_STRESS_LEVEL: &str = "中";
pub const DEFAULT_BODY_FEELING: &str = "良好";
pub const DEFAULT_EXERCISE_INTENSITY: &str = "中";
pub const DEFAULT_SLEEP_QUALITY: &str = "良";

/// Latest daily health record: movement, sleep, and mindfulness fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthData {
    pub steps: f64,
    pub heart_rate: f64,
    pub exercise_minutes: f64,
    pub sleep_hours: f64,
    pub deep_sleep_hours: f64,
    pub rem_sleep_hours: f64,
    pub meditation_minutes: f64,
    pub meditation_quality: f64,
    pub mindfulness_count: f64,
    pub stress_level: String,
    pub body_feeling: String,
    pub exercise_intensity: String,
    pub sleep_quality: String,
}

impl Default for HealthData {
    fn default() -> Self {
        Self {
            steps: 0.0,
            heart_rate: 0.0,
            exercise_minutes: 0.0,
            sleep_hours: 0.0,
            deep_sleep_hours: 0.0,
            rem_sleep_hours: 0.0,
            meditation_minutes: 0.0,
            meditation_quality: 0.0,
            mindfulness_count: 0.0,
            stress_level: DEFAULT_STRESS_LEVEL.to_string(),
            body_feeling: DEFAULT_BODY_FEELING.to_string(),
            exercise_intensity: DEFAULT_EXERCISE_INTENSITY.to_string(),
            sleep_quality: DEFAULT_SLEEP_QUALITY.to_string(),
        }
    }
}

/// Latest daily cognitive record: knowledge intake and creative output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CognitiveData {
    pub new_concepts: f64,
    pub new_notes: f64,
    pub concept_connections: f64,
    pub knowledge_applications: f64,
    pub reading_pages: f64,
    pub study_minutes: f64,
    pub creative_ideas: f64,
    pub idea_executions: f64,
    pub cross_domain_links: f64,
    /// 0–10 self-rating.
    pub study_quality: f64,
    /// 0–10 self-rating.
    pub innovation_rating: f64,
}

/// Latest daily content record: publishing output and audience reach.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentData {
    pub published_posts: f64,
    pub total_views: f64,
    pub total_engagement: f64,
    pub new_followers: f64,
    /// 0–10 self-rating.
    pub content_quality: f64,
    pub creation_minutes: f64,
    pub ideas_converted: f64,
    pub ideas_captured: f64,
    /// 0–10 self-rating.
    pub professional_rating: f64,
    /// 0–10 self-rating.
    pub innovation_rating: f64,
    pub revenue_contribution: f64,
}

/// Latest daily focus record: flow sessions and digital hygiene.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusData {
    pub flow_hours: f64,
    pub flow_sessions: f64,
    /// 0–10 self-rating.
    pub flow_quality: f64,
    pub screen_hours: f64,
    pub productive_hours: f64,
    pub entertainment_hours: f64,
    pub notifications: f64,
    pub phone_free_hours: f64,
    pub pomodoros_done: f64,
    pub task_switches: f64,
}

/// All four decoded categories for one refresh cycle, plus provenance.
/// `degraded` is true when the fallback dataset was substituted wholesale
/// because retrieval failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSnapshot {
    pub health: HealthData,
    pub cognitive: CognitiveData,
    pub content: ContentData,
    pub focus: FocusData,
    pub fetched_at: DateTime<Utc>,
    pub degraded: bool,
}

impl AssetSnapshot {
    /// Snapshot with all-default category data. Used as the base for
    /// builders in tests and for the offline path.
    pub fn empty(fetched_at: DateTime<Utc>) -> Self {
        Self {
            health: HealthData::default(),
            cognitive: CognitiveData::default(),
            content: ContentData::default(),
            focus: FocusData::default(),
            fetched_at,
            degraded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_defaults_use_neutral_labels() {
        let d = HealthData::default();
        assert_eq!(d.steps, 0.0);
        assert_eq!(d.stress_level, DEFAULT_STRESS_LEVEL);
        assert_eq!(d.sleep_quality, DEFAULT_SLEEP_QUALITY);
    }

    #[test]
    fn category_names_are_stable() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["health", "cognitive", "content", "focus"]);
    }

    #[test]
    fn health_data_deserializes_with_missing_fields() {
        let d: HealthData = serde_json::from_str(r#"{"steps": 1200}"#).unwrap();
        assert_eq!(d.steps, 1200.0);
        assert_eq!(d.heart_rate, 0.0);
        assert_eq!(d.sleep_quality, DEFAULT_SLEEP_QUALITY);
    }
}
