//! Boundary codes shared with the plant database.
//!
//! In memory these are plain enums. The numeric encodings exist only for
//! adapters that talk to the existing plant tables and must be used
//! verbatim there: vertical position is `+10` (top) / `-10` (bottom),
//! device type is `1` (device), `2` (sidesweep), `3` (bank).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Whether a bank or device sits above or below the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    Top,
    Bottom,
}

impl VerticalPosition {
    /// Database encoding of this position.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Top => 10,
            Self::Bottom => -10,
        }
    }

    /// Decode a database position code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPosition`] for anything but `+10` / `-10`.
    pub fn from_code(code: i32) -> Result<Self, ValidationError> {
        match code {
            10 => Ok(Self::Top),
            -10 => Ok(Self::Bottom),
            other => Err(ValidationError::InvalidPosition(other)),
        }
    }
}

impl fmt::Display for VerticalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

/// Kind of equipment addressed by a status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// An individual spray element inside an intensive bank.
    Device,
    /// A lateral spray tracked outside the bank hierarchy.
    Sidesweep,
    /// A whole cooling bank.
    Bank,
}

impl DeviceType {
    /// Database encoding of this device type.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Device => 1,
            Self::Sidesweep => 2,
            Self::Bank => 3,
        }
    }

    /// Decode a database device type code.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDeviceType`] for codes outside `1..=3`.
    pub fn from_code(code: i32) -> Result<Self, ValidationError> {
        match code {
            1 => Ok(Self::Device),
            2 => Ok(Self::Sidesweep),
            3 => Ok(Self::Bank),
            other => Err(ValidationError::InvalidDeviceType(other)),
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => f.write_str("device"),
            Self::Sidesweep => f.write_str("sidesweep"),
            Self::Bank => f.write_str("bank"),
        }
    }
}
