#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use cachewise_api::config::ServerConfig;
use cachewise_api::router::build_app_router;
use cachewise_api::state::AppState;
use cachewise_api::ws::WsManager;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// no analysis delay, and a long monitor interval so tests control ticks.
pub fn test_config(store_path: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        store_path: store_path.to_path_buf(),
        monitor_interval_ms: 60_000,
        analysis_delay_ms: 0,
    }
}

/// Build state and the full application router over a store file in `dir`.
///
/// The router is built by the same function `main.rs` uses, so tests
/// exercise the production middleware stack.
pub fn build_test_app(dir: &Path) -> (Router, AppState) {
    let config = test_config(&dir.join("store.json"));
    let state = AppState::new(config, Arc::new(WsManager::new()));
    (build_app_router(state.clone()), state)
}

pub async fn send(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
