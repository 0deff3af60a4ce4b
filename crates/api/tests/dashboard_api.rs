//! Integration tests for the cache dashboard endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post};

// ---------------------------------------------------------------------------
// Test: Empty store yields zeroed stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let response = get(app, "/api/v1/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let stats = &json["data"]["stats"];
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["hit_rate"], 0);
    assert_eq!(stats["avg_load_time"], 0);
    assert!(stats["latest_status"].is_null());
    assert_eq!(json["data"]["history"].as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// Test: Probe returns 201 and is reflected in the stats
// ---------------------------------------------------------------------------

#[tokio::test]
async fn probe_returns_created_and_updates_stats() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let response = post(app, "/api/v1/dashboard/probe").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let probe = &json["data"]["probe"];
    let status = probe["status"].as_str().unwrap();
    assert!(status == "HIT" || status == "MISS", "unexpected status {status}");

    let load_time = probe["load_time"].as_f64().unwrap();
    assert!((20.0..300.0).contains(&load_time));
    if load_time < 100.0 {
        assert_eq!(status, "HIT");
    }

    let stats = &json["data"]["dashboard"]["stats"];
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["latest_status"], status);
}

// ---------------------------------------------------------------------------
// Test: History persists across app instances sharing a store file
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_persists_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (app, _state) = common::build_test_app(dir.path());
        for _ in 0..3 {
            let response = post(app.clone(), "/api/v1/dashboard/probe").await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }
    }

    let (app, _state) = common::build_test_app(dir.path());
    let json = body_json(get(app, "/api/v1/dashboard").await).await;

    assert_eq!(json["data"]["stats"]["total"], 3);
    let history = json["data"]["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);

    let hits = json["data"]["stats"]["hits"].as_u64().unwrap();
    let misses = json["data"]["stats"]["misses"].as_u64().unwrap();
    assert_eq!(hits + misses, 3);
}

// ---------------------------------------------------------------------------
// Test: History is capped at ten probes, newest first
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_is_capped_at_ten() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    let mut last = serde_json::Value::Null;
    for _ in 0..12 {
        let json = body_json(post(app.clone(), "/api/v1/dashboard/probe").await).await;
        last = json["data"]["probe"].clone();
    }

    let json = body_json(get(app, "/api/v1/dashboard").await).await;
    let history = json["data"]["history"].as_array().unwrap();
    assert_eq!(history.len(), 10);
    assert_eq!(json["data"]["stats"]["total"], 10);
    assert_eq!(history[0], last);
}

// ---------------------------------------------------------------------------
// Test: DELETE /dashboard/history empties the store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn clear_history_returns_no_content() {
    let dir = tempfile::tempdir().unwrap();
    let (app, _state) = common::build_test_app(dir.path());

    post(app.clone(), "/api/v1/dashboard/probe").await;

    let response = delete(app.clone(), "/api/v1/dashboard/history").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(app, "/api/v1/dashboard").await).await;
    assert_eq!(json["data"]["stats"]["total"], 0);
    assert!(json["data"]["history"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: A corrupt stored value reads as an empty history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_history_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("store.json"),
        r#"{"cacheHits":"definitely not json"}"#,
    )
    .unwrap();

    let (app, _state) = common::build_test_app(dir.path());
    let response = get(app, "/api/v1/dashboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["stats"]["total"], 0);
}
