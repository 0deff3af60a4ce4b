//! Handlers for the performance monitor tool.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::background::performance_monitor::MonitorSnapshot;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /tools/performance-monitor
pub async fn get_snapshot(State(state): State<AppState>) -> Json<DataResponse<MonitorSnapshot>> {
    Json(DataResponse {
        data: state.monitor.snapshot().await,
    })
}

/// POST /tools/performance-monitor/start
///
/// Starting an already running monitor is a no-op.
pub async fn start(State(state): State<AppState>) -> Json<DataResponse<MonitorSnapshot>> {
    if !state.monitor.start().await {
        tracing::debug!("Performance monitor already running");
    }
    Json(DataResponse {
        data: state.monitor.snapshot().await,
    })
}

/// POST /tools/performance-monitor/stop
///
/// Stopping an idle monitor is a no-op.
pub async fn stop(State(state): State<AppState>) -> Json<DataResponse<MonitorSnapshot>> {
    if !state.monitor.stop().await {
        tracing::debug!("Performance monitor was not running");
    }
    Json(DataResponse {
        data: state.monitor.snapshot().await,
    })
}

/// DELETE /tools/performance-monitor/alerts
pub async fn clear_alerts(State(state): State<AppState>) -> StatusCode {
    state.monitor.clear_alerts().await;
    StatusCode::NO_CONTENT
}
