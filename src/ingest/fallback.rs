//! Wholesale fallback dataset used when retrieval fails (or when no
//! source is configured). Structurally valid, fixed values; the report
//! built from it is marked degraded so the UI can flag stale data.

use chrono::{DateTime, Utc};

use crate::assets::{AssetSnapshot, CognitiveData, ContentData, FocusData, HealthData};

pub fn snapshot(fetched_at: DateTime<Utc>) -> AssetSnapshot {
    AssetSnapshot {
        health: health(),
        cognitive: cognitive(),
        content: content(),
        focus: focus(),
        fetched_at,
        degraded: true,
    }
}

fn health() -> HealthData {
    HealthData {
        steps: 8_500.0,
        heart_rate: 72.0,
        exercise_minutes: 45.0,
        sleep_hours: 7.5,
        deep_sleep_hours: 1.8,
        rem_sleep_hours: 1.2,
        meditation_minutes: 15.0,
        meditation_quality: 8.0,
        mindfulness_count: 5.0,
        stress_level: "中".to_string(),
        body_feeling: "良好".to_string(),
        exercise_intensity: "中".to_string(),
        sleep_quality: "优".to_string(),
    }
}

fn cognitive() -> CognitiveData {
    CognitiveData {
        new_concepts: 5.0,
        new_notes: 12.0,
        concept_connections: 8.0,
        knowledge_applications: 3.0,
        reading_pages: 50.0,
        study_minutes: 120.0,
        creative_ideas: 4.0,
        idea_executions: 2.0,
        cross_domain_links: 2.0,
        study_quality: 8.5,
        innovation_rating: 7.8,
    }
}

fn content() -> ContentData {
    ContentData {
        published_posts: 2.0,
        total_views: 3_240.0,
        total_engagement: 180.0,
        new_followers: 267.0,
        content_quality: 8.2,
        creation_minutes: 180.0,
        ideas_converted: 3.0,
        ideas_captured: 5.0,
        professional_rating: 8.0,
        innovation_rating: 7.5,
        revenue_contribution: 1_580.0,
    }
}

fn focus() -> FocusData {
    FocusData {
        flow_hours: 3.2,
        flow_sessions: 2.0,
        flow_quality: 8.5,
        screen_hours: 5.2,
        productive_hours: 4.8,
        entertainment_hours: 1.4,
        notifications: 23.0,
        phone_free_hours: 8.5,
        pomodoros_done: 6.0,
        task_switches: 7.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score;

    #[test]
    fn fallback_is_marked_degraded() {
        let s = snapshot(Utc::now());
        assert!(s.degraded);
    }

    #[test]
    fn fallback_scores_cleanly_end_to_end() {
        let s = snapshot(Utc::now());
        let report = score::compute_all(&s);
        assert!(report.composite_index.is_finite());
        assert!((0.0..=100.0).contains(&report.composite_index));
        // The sample day is a decent one; it should not read as a crisis.
        assert!(report.composite_index >= 60.0);
    }
}
