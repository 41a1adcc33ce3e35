//! Equipment status port: one enablement record per component.

use std::future::Future;

use rotcool_domain::code::{DeviceType, VerticalPosition};
use rotcool_domain::error::CoolingError;
use rotcool_domain::status::EquipmentStatus;

/// One real-time enablement record.
///
/// The flags are already decoded: `true` means enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub zone_no: u32,
    pub zone_id: String,
    pub bank_seq: u32,
    pub l1_enabled: bool,
    pub l2_enabled: bool,
    pub record_id: i64,
}

impl StatusRecord {
    #[must_use]
    pub fn status(&self) -> EquipmentStatus {
        EquipmentStatus::new(self.l1_enabled, self.l2_enabled)
    }
}

/// Source of real-time equipment enablement.
pub trait EquipmentStatusSource {
    /// Load the record of component `sequence_no` (1-based) at `position`
    /// with `device_type`. Returns `Ok(None)` when no record exists.
    fn load_equipment_status(
        &self,
        sequence_no: u32,
        position: VerticalPosition,
        device_type: DeviceType,
    ) -> impl Future<Output = Result<Option<StatusRecord>, CoolingError>> + Send;
}

impl<T: EquipmentStatusSource + Send + Sync> EquipmentStatusSource for std::sync::Arc<T> {
    fn load_equipment_status(
        &self,
        sequence_no: u32,
        position: VerticalPosition,
        device_type: DeviceType,
    ) -> impl Future<Output = Result<Option<StatusRecord>, CoolingError>> + Send {
        (**self).load_equipment_status(sequence_no, position, device_type)
    }
}
