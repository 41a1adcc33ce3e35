//! Cooling process: aggregate root of the plant configuration.

use serde::{Deserialize, Serialize};

use crate::zone::{
    CoolingZone, IntensiveCoolingZone, StandardCoolingZone, TrimmingCoolingZone, ZoneType,
};

/// Longitudinal pyrometer positions along the line, in millimetres from the
/// process beginning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PyrometerPositions {
    pub entry_scan: f32,
    pub entry: f32,
    pub inter: f32,
    pub exit: f32,
    pub exit_scan: f32,
    /// Distance from the entry pyrometer to the start of the first bank.
    pub entry_to_first_bank: f32,
    /// Distance from the end of the last bank to the exit pyrometer.
    pub last_bank_to_exit: f32,
}

impl PyrometerPositions {
    /// Derive the two bank distances from the extent of the bank line.
    #[must_use]
    pub fn with_bank_extent(mut self, first_bank_start: f32, last_bank_end: f32) -> Self {
        self.entry_to_first_bank = first_bank_start - self.entry;
        self.last_bank_to_exit = self.exit - last_bank_end;
        self
    }
}

/// The configured cooling line: at most one zone of each type.
///
/// The zone count is derived from the populated slots, so it always equals
/// the number of zones actually present. It is written out as `zone_num`
/// and ignored when reading one back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoolingProcess {
    pub pyrometers: PyrometerPositions,
    pub intensive_zone: Option<IntensiveCoolingZone>,
    pub standard_zone: Option<StandardCoolingZone>,
    pub trimming_zone: Option<TrimmingCoolingZone>,
}

impl CoolingProcess {
    /// Number of zones present (0 to 3).
    #[must_use]
    pub fn zone_num(&self) -> usize {
        usize::from(self.intensive_zone.is_some())
            + usize::from(self.standard_zone.is_some())
            + usize::from(self.trimming_zone.is_some())
    }

    /// Store `zone` in the slot of its type, replacing any previous zone of
    /// that type. Returns the replaced zone, if any.
    pub fn place(&mut self, zone: CoolingZone) -> Option<CoolingZone> {
        match zone {
            CoolingZone::Intensive(z) => self
                .intensive_zone
                .replace(z)
                .map(CoolingZone::Intensive),
            CoolingZone::Standard(z) => self.standard_zone.replace(z).map(CoolingZone::Standard),
            CoolingZone::Trimming(z) => self.trimming_zone.replace(z).map(CoolingZone::Trimming),
        }
    }

    #[must_use]
    pub fn has_zone(&self, zone_type: ZoneType) -> bool {
        match zone_type {
            ZoneType::Intensive => self.intensive_zone.is_some(),
            ZoneType::Standard => self.standard_zone.is_some(),
            ZoneType::Trimming => self.trimming_zone.is_some(),
        }
    }

    /// Present zones in plant order (intensive, standard, trimming), cloned
    /// into their sum-type form.
    #[must_use]
    pub fn zones(&self) -> Vec<CoolingZone> {
        let mut zones = Vec::with_capacity(self.zone_num());
        if let Some(zone) = &self.intensive_zone {
            zones.push(CoolingZone::Intensive(zone.clone()));
        }
        if let Some(zone) = &self.standard_zone {
            zones.push(CoolingZone::Standard(zone.clone()));
        }
        if let Some(zone) = &self.trimming_zone {
            zones.push(CoolingZone::Trimming(zone.clone()));
        }
        zones
    }
}

#[derive(Serialize)]
struct ProcessRepr<'a> {
    zone_num: usize,
    pyrometers: &'a PyrometerPositions,
    intensive_zone: Option<&'a IntensiveCoolingZone>,
    standard_zone: Option<&'a StandardCoolingZone>,
    trimming_zone: Option<&'a TrimmingCoolingZone>,
}

impl Serialize for CoolingProcess {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ProcessRepr {
            zone_num: self.zone_num(),
            pyrometers: &self.pyrometers,
            intensive_zone: self.intensive_zone.as_ref(),
            standard_zone: self.standard_zone.as_ref(),
            trimming_zone: self.trimming_zone.as_ref(),
        }
        .serialize(serializer)
    }
}
