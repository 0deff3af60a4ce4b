//! Handlers for the cache dashboard.
//!
//! The probe history lives in the key-value store under `cacheHits` and is
//! reloaded on every request, so it survives restarts.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cachewise_core::metrics::dashboard::{CacheHit, DashboardStats, HitHistory};
use cachewise_core::simulation;
use cachewise_store::repositories::CacheHitRepo;
use chrono::Utc;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Probe history with its aggregates.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    /// Newest first.
    pub history: Vec<CacheHit>,
}

impl From<&HitHistory> for DashboardView {
    fn from(history: &HitHistory) -> Self {
        Self {
            stats: history.stats(),
            history: history.entries(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub probe: CacheHit,
    pub dashboard: DashboardView,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardView>>> {
    let history = CacheHitRepo::load(&state.store).await?;
    Ok(Json(DataResponse {
        data: DashboardView::from(&history),
    }))
}

/// POST /dashboard/probe
///
/// Simulate a cache probe and prepend it to the stored history.
pub async fn run_probe(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<DataResponse<ProbeResponse>>)> {
    let probe = simulation::probe(&mut rand::rng(), Utc::now());
    let history = CacheHitRepo::append(&state.store, probe.clone()).await?;

    tracing::info!(
        status = ?probe.status,
        load_time_ms = probe.load_time,
        history_len = history.len(),
        "Cache probe recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ProbeResponse {
                probe,
                dashboard: DashboardView::from(&history),
            },
        }),
    ))
}

/// DELETE /dashboard/history
pub async fn clear_history(State(state): State<AppState>) -> AppResult<StatusCode> {
    CacheHitRepo::clear(&state.store).await?;
    tracing::info!("Cache probe history cleared");
    Ok(StatusCode::NO_CONTENT)
}
