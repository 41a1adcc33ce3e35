//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod notifications;
#[allow(clippy::missing_errors_doc)]
pub mod process;
#[allow(clippy::missing_errors_doc)]
pub mod status;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/process", get(process::get))
        .route("/status", get(status::get))
        .route("/status/summary", get(status::summary))
        .route("/status/{group}/{sequence_no}", get(status::slot))
        .route("/notifications/stream", get(notifications::stream))
}
