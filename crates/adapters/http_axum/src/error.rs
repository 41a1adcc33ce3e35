//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rotcool_domain::status::{EquipmentGroup, UnknownGroupError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The path named a group that does not exist.
    UnknownGroup(UnknownGroupError),
    /// The sequence number is outside `1..=capacity` of the group.
    SlotNotFound {
        group: EquipmentGroup,
        sequence_no: usize,
    },
}

impl From<UnknownGroupError> for ApiError {
    fn from(err: UnknownGroupError) -> Self {
        Self::UnknownGroup(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UnknownGroup(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            Self::SlotNotFound { group, sequence_no } => (
                StatusCode::NOT_FOUND,
                format!(
                    "{group} {sequence_no} not found (valid range 1..={})",
                    group.capacity()
                ),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
