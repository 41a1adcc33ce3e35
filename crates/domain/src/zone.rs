//! Cooling zones: longitudinal sections of the run-out table.
//!
//! A zone is exactly one of three variants, selected by the zone-type
//! discriminant stored in the plant database. All variants share the
//! scalar [`ZoneSpec`]; each owns an ordered list of its own unit variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoolingError;
use crate::unit::{IntensiveCoolingUnit, StandardCoolingUnit, TrimmingCoolingUnit};

/// Zone-type discriminant. Database codes map bijectively:
/// `1` intensive, `2` standard, `3` trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    Intensive,
    Standard,
    Trimming,
}

impl ZoneType {
    /// All zone types in plant order.
    pub const ALL: [Self; 3] = [Self::Intensive, Self::Standard, Self::Trimming];

    /// Database encoding of this zone type.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Intensive => 1,
            Self::Standard => 2,
            Self::Trimming => 3,
        }
    }
}

impl TryFrom<i32> for ZoneType {
    type Error = CoolingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Intensive),
            2 => Ok(Self::Standard),
            3 => Ok(Self::Trimming),
            other => Err(CoolingError::UnknownZoneType { code: other }),
        }
    }
}

impl fmt::Display for ZoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intensive => f.write_str("intensive"),
            Self::Standard => f.write_str("standard"),
            Self::Trimming => f.write_str("trimming"),
        }
    }
}

/// Scalar configuration shared by every zone variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSpec {
    pub zone_id: String,
    pub zone_no: u32,
    pub zone_seq: u32,
    /// Number of units configured for the zone.
    pub num_units: u32,
    /// Length in millimetres.
    pub length: f32,
    /// Width in millimetres.
    pub width: f32,
    pub main_pressure: f32,
    pub water_temperature: f32,
}

macro_rules! define_zone {
    ($(#[doc = $doc:expr])* $name:ident, $unit:ty, $zone_type:expr, $max_units:expr) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub spec: ZoneSpec,
            pub units: Vec<$unit>,
        }

        impl $name {
            /// Unit count the plant model gives this zone type.
            ///
            /// Advisory only: `num_units` comes verbatim from the plant
            /// database and the reference layout of
            /// [`CoolingProcessBuilder::reference_plant`](crate::builder::CoolingProcessBuilder::reference_plant)
            /// uses more units than this, so it is never enforced.
            pub const NOMINAL_MAX_UNITS: usize = $max_units;

            /// Create a zone carrying only its scalar configuration.
            #[must_use]
            pub fn new(spec: ZoneSpec) -> Self {
                Self {
                    spec,
                    units: Vec::new(),
                }
            }

            #[must_use]
            pub fn zone_type(&self) -> ZoneType {
                $zone_type
            }
        }
    };
}

define_zone!(
    /// The intensive (high flow) zone at the entry of the cooling line.
    IntensiveCoolingZone,
    IntensiveCoolingUnit,
    ZoneType::Intensive,
    2
);

define_zone!(
    /// The standard laminar zone.
    StandardCoolingZone,
    StandardCoolingUnit,
    ZoneType::Standard,
    2
);

define_zone!(
    /// The trimming zone used for fine temperature control before the coiler.
    TrimmingCoolingZone,
    TrimmingCoolingUnit,
    ZoneType::Trimming,
    1
);

/// A zone of any variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "zone_type", rename_all = "lowercase")]
pub enum CoolingZone {
    Intensive(IntensiveCoolingZone),
    Standard(StandardCoolingZone),
    Trimming(TrimmingCoolingZone),
}

impl CoolingZone {
    /// Build the variant matching `zone_type`, populated with scalars only.
    #[must_use]
    pub fn from_spec(zone_type: ZoneType, spec: ZoneSpec) -> Self {
        match zone_type {
            ZoneType::Intensive => Self::Intensive(IntensiveCoolingZone::new(spec)),
            ZoneType::Standard => Self::Standard(StandardCoolingZone::new(spec)),
            ZoneType::Trimming => Self::Trimming(TrimmingCoolingZone::new(spec)),
        }
    }

    #[must_use]
    pub fn zone_type(&self) -> ZoneType {
        match self {
            Self::Intensive(_) => ZoneType::Intensive,
            Self::Standard(_) => ZoneType::Standard,
            Self::Trimming(_) => ZoneType::Trimming,
        }
    }

    #[must_use]
    pub fn spec(&self) -> &ZoneSpec {
        match self {
            Self::Intensive(zone) => &zone.spec,
            Self::Standard(zone) => &zone.spec,
            Self::Trimming(zone) => &zone.spec,
        }
    }

    /// Number of units actually attached (not the configured count).
    #[must_use]
    pub fn unit_count(&self) -> usize {
        match self {
            Self::Intensive(zone) => zone.units.len(),
            Self::Standard(zone) => zone.units.len(),
            Self::Trimming(zone) => zone.units.len(),
        }
    }
}
