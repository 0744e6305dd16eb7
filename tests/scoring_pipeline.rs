// tests/scoring_pipeline.rs
//
// End-to-end checks of the scoring engine through its public entry
// point: reference scenario values, composite weighting, and
// repeatability on arbitrary inputs.

use chrono::Utc;
use rand::Rng;

use pei_dashboard::assets::{AssetSnapshot, CognitiveData, ContentData, FocusData, HealthData};
use pei_dashboard::score::{self, StatusBand};

fn reference_snapshot() -> AssetSnapshot {
    AssetSnapshot {
        health: HealthData {
            steps: 8_500.0,
            heart_rate: 72.0,
            exercise_minutes: 45.0,
            sleep_hours: 7.5,
            sleep_quality: "良".into(),
            meditation_minutes: 15.0,
            meditation_quality: 8.0,
            mindfulness_count: 5.0,
            ..HealthData::default()
        },
        cognitive: CognitiveData {
            new_concepts: 5.0,
            concept_connections: 8.0,
            knowledge_applications: 3.0,
            reading_pages: 50.0,
            creative_ideas: 4.0,
            idea_executions: 2.0,
            cross_domain_links: 2.0,
            study_quality: 8.5,
            innovation_rating: 7.8,
            ..CognitiveData::default()
        },
        content: ContentData {
            published_posts: 2.0,
            total_views: 3_240.0,
            total_engagement: 180.0,
            new_followers: 267.0,
            content_quality: 8.2,
            ideas_converted: 3.0,
            ideas_captured: 5.0,
            professional_rating: 8.0,
            ..ContentData::default()
        },
        focus: FocusData {
            flow_hours: 3.2,
            flow_sessions: 2.0,
            flow_quality: 8.5,
            screen_hours: 5.2,
            productive_hours: 4.8,
            notifications: 23.0,
            phone_free_hours: 8.5,
            ..FocusData::default()
        },
        fetched_at: Utc::now(),
        degraded: false,
    }
}

#[test]
fn reference_day_health_breakdown() {
    let report = score::compute_all(&reference_snapshot());

    // Exercise: 85*0.3 + 50*0.4 + 100*0.3
    assert!((report.health.exercise - 75.5).abs() < 1e-9);
    // Sleep: 100*0.4 + 80*0.4 + 85*0.2
    assert!((report.health.sleep - 89.0).abs() < 1e-9);
    // Health total per component weights.
    let expected = 75.5 * 0.40 + 89.0 * 0.35 + report.health.mindfulness * 0.25;
    assert!((report.health.total - expected).abs() < 1e-9);
}

#[test]
fn composite_index_is_the_published_weighting() {
    let report = score::compute_all(&reference_snapshot());
    let expected = report.health.total * 0.25
        + report.cognitive.total * 0.30
        + report.content.total * 0.25
        + report.focus.total * 0.20;
    assert!((report.composite_index - expected).abs() < 1e-12);
    assert_eq!(report.status, score::classify(report.composite_index));
}

#[test]
fn empty_day_still_scores_and_reads_as_recovery() {
    let snapshot = AssetSnapshot::empty(Utc::now());
    let report = score::compute_all(&snapshot);
    assert!(report.composite_index.is_finite());
    assert_eq!(report.status, StatusBand::NeedsRecovery);
}

#[test]
fn pipeline_is_bit_identical_on_repeated_runs() {
    let mut rng = rand::rng();
    for _ in 0..50 {
        let mut snapshot = AssetSnapshot::empty(Utc::now());
        snapshot.health.steps = rng.random_range(0.0..30_000.0);
        snapshot.health.heart_rate = rng.random_range(40.0..180.0);
        snapshot.health.sleep_hours = rng.random_range(0.0..14.0);
        snapshot.cognitive.creative_ideas = rng.random_range(0.0..10.0);
        snapshot.cognitive.idea_executions = rng.random_range(0.0..10.0);
        snapshot.content.total_views = rng.random_range(0.0..10_000.0);
        snapshot.content.total_engagement = rng.random_range(0.0..1_000.0);
        snapshot.focus.screen_hours = rng.random_range(0.0..16.0);
        snapshot.focus.notifications = rng.random_range(0.0..300.0);

        let a = score::compute_all(&snapshot);
        let b = score::compute_all(&snapshot);
        assert_eq!(a, b);
        assert_eq!(
            a.composite_index.to_bits(),
            b.composite_index.to_bits(),
            "composite must be bit-identical for identical inputs"
        );
        assert!(a.composite_index.is_finite());
        assert!((0.0..=100.0).contains(&a.composite_index));
    }
}
