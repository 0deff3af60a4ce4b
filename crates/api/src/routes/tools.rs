//! Route definitions for the cache tools.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{cache_analyzer, overview, performance_monitor, purge_calculator};
use crate::state::AppState;

/// Routes mounted at `/tools`.
///
/// ```text
/// GET    /                                  -> list_tools
/// GET    /purge-calculator                  -> calculate
/// POST   /cache-analyzer/run                -> run_analysis
/// GET    /performance-monitor               -> get_snapshot
/// POST   /performance-monitor/start         -> start
/// POST   /performance-monitor/stop          -> stop
/// DELETE /performance-monitor/alerts        -> clear_alerts
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(overview::list_tools))
        .route("/purge-calculator", get(purge_calculator::calculate))
        .route("/cache-analyzer/run", post(cache_analyzer::run_analysis))
        .route(
            "/performance-monitor",
            get(performance_monitor::get_snapshot),
        )
        .route(
            "/performance-monitor/start",
            post(performance_monitor::start),
        )
        .route("/performance-monitor/stop", post(performance_monitor::stop))
        .route(
            "/performance-monitor/alerts",
            delete(performance_monitor::clear_alerts),
        )
}
