//! Handlers for the home overview and tool catalogue.

use axum::Json;
use cachewise_core::guide::{self, Link, Overview};

use crate::response::DataResponse;

/// GET /overview
pub async fn get_overview() -> Json<DataResponse<&'static Overview>> {
    Json(DataResponse {
        data: &guide::OVERVIEW,
    })
}

/// GET /tools
pub async fn list_tools() -> Json<DataResponse<&'static [Link]>> {
    Json(DataResponse { data: &guide::TOOLS })
}
