//! Handlers for the learning topics.

use axum::extract::Path;
use axum::Json;
use cachewise_core::guide::{self, Link, TopicBody};

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /learn
pub async fn list_topics() -> Json<DataResponse<&'static [Link]>> {
    Json(DataResponse {
        data: &guide::TOPICS,
    })
}

/// GET /learn/{topic}
///
/// Returns 404 for an unknown slug.
pub async fn get_topic(Path(slug): Path<String>) -> AppResult<Json<DataResponse<TopicBody>>> {
    let body = guide::topic(&slug)?;
    Ok(Json(DataResponse { data: body }))
}
