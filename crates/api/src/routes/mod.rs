pub mod dashboard;
pub mod health;
pub mod learn;
pub mod tools;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                         WebSocket (monitor feed)
/// /overview                                   home overview
///
/// /dashboard                                  probe history + stats
/// /dashboard/probe                            record a simulated probe (POST)
/// /dashboard/history                          clear history (DELETE)
///
/// /learn                                      topic list
/// /learn/{topic}                              topic body
///
/// /tools                                      tool list
/// /tools/purge-calculator                     strategy recommendation
/// /tools/cache-analyzer/run                   simulated analysis (POST)
/// /tools/performance-monitor                  snapshot
/// /tools/performance-monitor/start            start ticker (POST)
/// /tools/performance-monitor/stop             stop ticker (POST)
/// /tools/performance-monitor/alerts           clear alerts (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/overview", get(handlers::overview::get_overview))
        .nest("/dashboard", dashboard::router())
        .nest("/learn", learn::router())
        .nest("/tools", tools::router())
}
