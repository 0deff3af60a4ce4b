//! Integration tests for the purge calculator, cache analyzer, and
//! performance monitor endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post};

// ---------------------------------------------------------------------------
// Purge calculator
// ---------------------------------------------------------------------------

#[tokio::test]
async fn purge_calculator_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/tools/purge-calculator").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["inputs"]["content_type"], "static");
    assert_eq!(data["inputs"]["update_frequency"], "daily");
    assert_eq!(data["inputs"]["traffic_level"], "medium");
    assert_eq!(data["inputs"]["criticality"], "normal");

    let rec = &data["recommendation"];
    assert_eq!(rec["strategy"], "selective");
    assert_eq!(rec["method"], "url");
    assert_eq!(rec["timing"], "immediate");
    assert_eq!(rec["risk"], "low");
    assert_eq!(data["tips"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn purge_calculator_dynamic_hourly_wins_over_critical() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let uri = "/api/v1/tools/purge-calculator?content_type=dynamic&update_frequency=hourly&criticality=critical";
    let json = body_json(get(app, uri).await).await;

    let rec = &json["data"]["recommendation"];
    assert_eq!(rec["strategy"], "automated");
    assert_eq!(rec["method"], "url");
    assert_eq!(rec["timing"], "scheduled");
    assert_eq!(rec["risk"], "low");
}

#[tokio::test]
async fn purge_calculator_critical_purges_everything() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let json = body_json(get(app, "/api/v1/tools/purge-calculator?criticality=critical").await).await;

    let rec = &json["data"]["recommendation"];
    assert_eq!(rec["strategy"], "immediate");
    assert_eq!(rec["method"], "everything");
    assert_eq!(rec["risk"], "medium");
}

#[tokio::test]
async fn purge_calculator_high_traffic_frequent_uses_tags() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let uri = "/api/v1/tools/purge-calculator?traffic_level=high&update_frequency=frequent";
    let json = body_json(get(app, uri).await).await;

    let rec = &json["data"]["recommendation"];
    assert_eq!(rec["strategy"], "selective");
    assert_eq!(rec["method"], "tag");
    assert_eq!(rec["timing"], "immediate");
    assert_eq!(rec["risk"], "medium");
}

#[tokio::test]
async fn purge_calculator_rejects_unknown_value() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/tools/purge-calculator?traffic_level=extreme").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Cache analyzer
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cache_analyzer_returns_graded_report() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let response = post(app, "/api/v1/tools/cache-analyzer/run").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    let hit_rate = data["report"]["hit_rate"].as_u64().unwrap();
    assert!((75..=95).contains(&hit_rate));
    assert_eq!(data["miss_rate"].as_u64().unwrap(), 100 - hit_rate);
    assert_eq!(data["performing_well"], hit_rate >= 80);
    assert_eq!(data["recommendations"].as_array().unwrap().len(), 4);

    let grade = data["grade"].as_str().unwrap();
    assert!(["A+", "A", "B", "C", "D"].contains(&grade));
}

// ---------------------------------------------------------------------------
// Performance monitor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn monitor_is_idle_before_start() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let json = body_json(get(app, "/api/v1/tools/performance-monitor").await).await;
    let data = &json["data"];
    assert_eq!(data["is_monitoring"], false);
    assert_eq!(data["interval_ms"], 60_000);
    assert!(data["metrics"].as_array().unwrap().is_empty());
    assert_eq!(data["summary"]["sample_count"], 0);
}

#[tokio::test]
async fn monitor_start_records_initial_sample_and_stop_keeps_it() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = common::build_test_app(dir.path());

    let json = body_json(post(app.clone(), "/api/v1/tools/performance-monitor/start").await).await;
    assert_eq!(json["data"]["is_monitoring"], true);
    assert_eq!(json["data"]["metrics"].as_array().unwrap().len(), 1);
    assert!(state.monitor.is_running().await);

    // Second start is a no-op.
    let json = body_json(post(app.clone(), "/api/v1/tools/performance-monitor/start").await).await;
    assert_eq!(json["data"]["metrics"].as_array().unwrap().len(), 1);

    let json = body_json(post(app.clone(), "/api/v1/tools/performance-monitor/stop").await).await;
    assert_eq!(json["data"]["is_monitoring"], false);
    assert_eq!(json["data"]["metrics"].as_array().unwrap().len(), 1);
    assert!(!state.monitor.is_running().await);

    let health = body_json(get(app, "/health").await).await;
    assert_eq!(health["monitoring"], false);
}

#[tokio::test]
async fn monitor_clear_alerts_returns_no_content() {
    let dir = tempfile::tempdir().unwrap();
    let (app, state) = common::build_test_app(dir.path());

    post(app.clone(), "/api/v1/tools/performance-monitor/start").await;
    state.monitor.stop().await;

    let response = delete(app.clone(), "/api/v1/tools/performance-monitor/alerts").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, "/api/v1/tools/performance-monitor").await).await;
    assert!(json["data"]["alerts"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["metrics"].as_array().unwrap().len(), 1);
}
