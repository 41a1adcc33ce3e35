//! JSON handlers for the live equipment-status snapshot.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use rotcool_domain::status::{CoolingProcessStatus, EquipmentGroup};
use rotcool_domain::time::Timestamp;

use crate::error::ApiError;
use crate::state::AppState;

/// Per-group counters of one snapshot.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub group: EquipmentGroup,
    pub total: usize,
    /// Components with L1 enabled.
    pub enabled: usize,
    /// Components with both L1 and L2 enabled.
    pub available: usize,
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub refreshed_at: Timestamp,
    pub groups: Vec<GroupSummary>,
}

impl From<&CoolingProcessStatus> for StatusSummary {
    fn from(snapshot: &CoolingProcessStatus) -> Self {
        Self {
            refreshed_at: snapshot.refreshed_at(),
            groups: EquipmentGroup::ALL
                .into_iter()
                .map(|group| GroupSummary {
                    group,
                    total: group.capacity(),
                    enabled: snapshot.enabled_count(group),
                    available: snapshot.available_count(group),
                })
                .collect(),
        }
    }
}

/// One slot addressed by its physical sequence number.
#[derive(Debug, Serialize)]
pub struct SlotView {
    pub group: EquipmentGroup,
    pub sequence_no: usize,
    pub l1_enabled: bool,
    pub l2_enabled: bool,
    pub available: bool,
}

/// `GET /api/status`
pub async fn get(State(state): State<AppState>) -> Json<CoolingProcessStatus> {
    Json(CoolingProcessStatus::clone(&state.status.latest()))
}

/// `GET /api/status/summary`
pub async fn summary(State(state): State<AppState>) -> Json<StatusSummary> {
    Json(StatusSummary::from(state.status.latest().as_ref()))
}

/// `GET /api/status/{group}/{sequence_no}`
pub async fn slot(
    State(state): State<AppState>,
    Path((group, sequence_no)): Path<(String, usize)>,
) -> Result<Json<SlotView>, ApiError> {
    let group: EquipmentGroup = group.parse()?;
    let status = sequence_no
        .checked_sub(1)
        .and_then(|index| state.status.latest().slot(group, index))
        .ok_or(ApiError::SlotNotFound { group, sequence_no })?;

    Ok(Json(SlotView {
        group,
        sequence_no,
        l1_enabled: status.l1_enabled,
        l2_enabled: status.l2_enabled,
        available: status.is_available(),
    }))
}
