//! Route definitions for the learning topics.

use axum::routing::get;
use axum::Router;

use crate::handlers::learn;
use crate::state::AppState;

/// Routes mounted at `/learn`.
///
/// ```text
/// GET /            -> list_topics
/// GET /{topic}     -> get_topic
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(learn::list_topics))
        .route("/{topic}", get(learn::get_topic))
}
