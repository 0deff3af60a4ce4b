//! Handler for the simulated cache analyzer.

use axum::extract::State;
use axum::Json;
use cachewise_core::analyzer::{self, AnalysisOutcome};
use cachewise_core::simulation;

use crate::response::DataResponse;
use crate::state::AppState;

/// POST /tools/cache-analyzer/run
///
/// Waits the configured analysis delay, then returns a graded random report.
pub async fn run_analysis(State(state): State<AppState>) -> Json<DataResponse<AnalysisOutcome>> {
    let delay = state.config.analysis_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let report = simulation::analysis_report(&mut rand::rng());
    let outcome = analyzer::assess(report);
    tracing::info!(
        hit_rate = outcome.report.hit_rate,
        grade = ?outcome.grade,
        "Cache analysis completed"
    );
    Json(DataResponse { data: outcome })
}
