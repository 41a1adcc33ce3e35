//! JSON handler for the assembled cooling process.

use axum::Json;
use axum::extract::State;

use rotcool_domain::process::CoolingProcess;

use crate::state::AppState;

/// `GET /api/process`
pub async fn get(State(state): State<AppState>) -> Json<CoolingProcess> {
    Json(CoolingProcess::clone(&state.process))
}
