//! Route definitions for the cache dashboard.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /           -> get_dashboard
/// POST   /probe      -> run_probe
/// DELETE /history    -> clear_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::get_dashboard))
        .route("/probe", post(dashboard::run_probe))
        .route("/history", delete(dashboard::clear_history))
}
