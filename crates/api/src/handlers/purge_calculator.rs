//! Handler for the purge strategy calculator.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::Json;
use cachewise_core::purge_strategy::{self, PurgeAdvice, StrategyInputs};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /tools/purge-calculator?content_type=..&update_frequency=..&traffic_level=..&criticality=..
///
/// Omitted parameters fall back to `static`, `daily`, `medium`, `normal`.
/// Unknown values are a 400.
pub async fn calculate(
    query: Result<Query<StrategyInputs>, QueryRejection>,
) -> AppResult<Json<DataResponse<PurgeAdvice>>> {
    let Query(inputs) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let advice = purge_strategy::advise(inputs);
    tracing::debug!(
        ?inputs,
        strategy = ?advice.recommendation.strategy,
        "Purge strategy calculated"
    );
    Ok(Json(DataResponse { data: advice }))
}
