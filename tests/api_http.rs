// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - GET /report
// - POST /score
// - GET /insights
// - GET /debug/history

use axum::{
    body::{self, Body},
    http::Request,
    Router,
};
use http::StatusCode;
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use pei_dashboard::api::{self, AppState};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Build the same Router the binary uses, in offline mode.
fn test_router() -> Router {
    api::router(AppState::offline())
}

async fn get_json(app: Router, uri: &str) -> Json {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request");
    let resp = app.oneshot(req).await.expect("oneshot");
    assert!(
        resp.status().is_success(),
        "GET {uri} should be 2xx, got {}",
        resp.status()
    );
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    serde_json::from_slice(&bytes).expect("parse json")
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let app = test_router();

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = app.oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK, "health should be 200");

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    let body = String::from_utf8(bytes).expect("utf8");
    assert_eq!(body.trim(), "ok");
}

#[tokio::test]
async fn api_report_serves_a_complete_degraded_report() {
    let v = get_json(test_router(), "/report").await;

    let scores = v.get("scores").expect("missing 'scores'");
    assert!(scores.get("compositeIndex").is_some(), "missing compositeIndex");
    assert!(scores.get("status").is_some(), "missing status");
    for cat in ["health", "cognitive", "content", "focus"] {
        assert!(scores.get(cat).is_some(), "missing category '{cat}'");
    }
    // Offline state serves the fallback dataset, flagged as such.
    assert_eq!(v["snapshot"]["degraded"], json!(true));
    assert!(v.get("advice").is_some(), "missing 'advice'");
}

#[tokio::test]
async fn api_score_computes_from_caller_data() {
    let app = test_router();

    let payload = json!({
        "health": {
            "steps": 8500,
            "heartRate": 72,
            "exerciseMinutes": 45,
            "sleepHours": 7.5,
            "sleepQuality": "良",
            "meditationMinutes": 15,
            "meditationQuality": 8,
            "mindfulnessCount": 5
        }
    });
    let req = Request::builder()
        .method("POST")
        .uri("/score")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST /score");

    let resp = app.oneshot(req).await.expect("oneshot /score");
    assert!(
        resp.status().is_success(),
        "POST /score should be 2xx, got {}",
        resp.status()
    );

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read json")
        .to_vec();
    let v: Json = serde_json::from_slice(&bytes).expect("parse score json");

    // Contract checks for UI consumers.
    let exercise = v["health"]["exercise"].as_f64().expect("health.exercise");
    assert!((exercise - 75.5).abs() < 1e-9, "exercise ~= 75.5, got {exercise}");
    assert!(v.get("compositeIndex").is_some(), "missing compositeIndex");
    // Unsent categories score from defaults rather than erroring.
    assert!(v["focus"]["total"].as_f64().is_some());
}

#[tokio::test]
async fn api_insights_returns_static_content() {
    let v = get_json(test_router(), "/insights").await;

    let habits = v["habits"].as_array().expect("habits array");
    assert!(!habits.is_empty());
    assert!(habits[0].get("completionPct").is_some(), "missing completionPct");
    assert!(v["weekly"]["findings"].is_array());
}

#[tokio::test]
async fn api_refresh_publishes_a_new_report() {
    let state = AppState::offline();
    let app = api::router(state.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/refresh")
        .body(Body::empty())
        .expect("build POST /refresh");
    let resp = app.oneshot(req).await.expect("oneshot /refresh");
    assert!(resp.status().is_success());

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read json")
        .to_vec();
    let v: Json = serde_json::from_slice(&bytes).expect("parse refresh json");
    assert_eq!(v["snapshot"]["degraded"], json!(true));

    // The refreshed report lands in history alongside the initial one.
    let rows = get_json(api::router(state), "/debug/history").await;
    assert_eq!(rows.as_array().expect("history array").len(), 2);
}

#[tokio::test]
async fn api_debug_history_tracks_published_reports() {
    let v = get_json(test_router(), "/debug/history").await;
    let rows = v.as_array().expect("history array");
    // The initial report is logged at state construction.
    assert_eq!(rows.len(), 1);
    assert!(rows[0].get("compositeIndex").is_some());
    assert_eq!(rows[0]["degraded"], json!(true));
}
