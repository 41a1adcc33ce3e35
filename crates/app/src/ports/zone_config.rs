//! Zone configuration port: one configuration record per zone number.

use std::future::Future;

use rotcool_domain::error::CoolingError;
use rotcool_domain::zone::ZoneSpec;

/// One row of plant zone configuration, as stored.
///
/// `zone_type` is the raw discriminant; it is validated by the caller,
/// never by the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    pub area_id: String,
    pub center_id: String,
    pub zone_no: u32,
    pub zone_id: String,
    pub zone_seq: u32,
    pub zone_type: i32,
    pub num_units: u32,
    /// Length in millimetres.
    pub length: f32,
    /// Width in millimetres.
    pub width: f32,
    pub main_pressure: f32,
    pub water_temperature: f32,
}

impl ZoneRecord {
    /// Copy the zone scalars into a [`ZoneSpec`].
    #[must_use]
    pub fn into_spec(self) -> ZoneSpec {
        ZoneSpec {
            zone_id: self.zone_id,
            zone_no: self.zone_no,
            zone_seq: self.zone_seq,
            num_units: self.num_units,
            length: self.length,
            width: self.width,
            main_pressure: self.main_pressure,
            water_temperature: self.water_temperature,
        }
    }
}

/// Source of zone configuration records.
pub trait ZoneConfigSource {
    /// Load the configuration of `zone_no`. Returns `Ok(None)` when no
    /// record exists for it.
    fn load_zone_config(
        &self,
        zone_no: u32,
    ) -> impl Future<Output = Result<Option<ZoneRecord>, CoolingError>> + Send;
}

impl<T: ZoneConfigSource + Send + Sync> ZoneConfigSource for std::sync::Arc<T> {
    fn load_zone_config(
        &self,
        zone_no: u32,
    ) -> impl Future<Output = Result<Option<ZoneRecord>, CoolingError>> + Send {
        (**self).load_zone_config(zone_no)
    }
}
