//! Plant layout: which bank numbers belong to which zone.
//!
//! The mapping describes one specific installation and is configuration
//! data, not a universal constant. [`PlantLayout::reference`] returns the
//! layout of the reference plant (68 banks per side).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::status::TOTAL_BANKS;
use crate::zone::ZoneType;

/// An inclusive range of plant-wide bank numbers assigned to one zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankRange {
    pub zone_type: ZoneType,
    pub first_bank: u32,
    pub last_bank: u32,
}

impl BankRange {
    #[must_use]
    pub fn banks(&self) -> RangeInclusive<u32> {
        self.first_bank..=self.last_bank
    }

    #[must_use]
    pub fn len(&self) -> usize {
        if self.last_bank < self.first_bank {
            return 0;
        }
        (self.last_bank - self.first_bank + 1) as usize
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bank-number ranges per zone type for one installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantLayout {
    ranges: Vec<BankRange>,
}

impl PlantLayout {
    /// Build a layout after checking that ranges are non-empty, start at
    /// bank 1 or later, stay within [`TOTAL_BANKS`], do not overlap, and name
    /// each zone type at most once.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLayout`] describing the first problem.
    pub fn new(ranges: Vec<BankRange>) -> Result<Self, ValidationError> {
        let layout = Self { ranges };
        layout.validate()?;
        Ok(layout)
    }

    /// Layout of the reference plant: banks 1–12 intensive, 13–36 standard,
    /// 37–68 trimming.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            ranges: vec![
                BankRange {
                    zone_type: ZoneType::Intensive,
                    first_bank: 1,
                    last_bank: 12,
                },
                BankRange {
                    zone_type: ZoneType::Standard,
                    first_bank: 13,
                    last_bank: 36,
                },
                BankRange {
                    zone_type: ZoneType::Trimming,
                    first_bank: 37,
                    last_bank: 68,
                },
            ],
        }
    }

    /// Check the layout invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLayout`] describing the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let max_bank = TOTAL_BANKS as u32;
        for (i, range) in self.ranges.iter().enumerate() {
            if range.is_empty() || range.first_bank == 0 {
                return Err(ValidationError::InvalidLayout(format!(
                    "{} range {}..={} is empty",
                    range.zone_type, range.first_bank, range.last_bank
                )));
            }
            if range.last_bank > max_bank {
                return Err(ValidationError::InvalidLayout(format!(
                    "{} range ends at bank {} beyond {max_bank}",
                    range.zone_type, range.last_bank
                )));
            }
            for other in &self.ranges[i + 1..] {
                if other.zone_type == range.zone_type {
                    return Err(ValidationError::InvalidLayout(format!(
                        "{} zone listed twice",
                        range.zone_type
                    )));
                }
                if other.first_bank <= range.last_bank && range.first_bank <= other.last_bank {
                    return Err(ValidationError::InvalidLayout(format!(
                        "{} and {} ranges overlap",
                        range.zone_type, other.zone_type
                    )));
                }
            }
        }
        Ok(())
    }

    /// Zone type that owns the plant-wide `bank_no`, if any.
    #[must_use]
    pub fn zone_type_for_bank(&self, bank_no: u32) -> Option<ZoneType> {
        self.ranges
            .iter()
            .find(|range| range.banks().contains(&bank_no))
            .map(|range| range.zone_type)
    }

    /// The range assigned to `zone_type`, if any.
    #[must_use]
    pub fn range(&self, zone_type: ZoneType) -> Option<&BankRange> {
        self.ranges.iter().find(|range| range.zone_type == zone_type)
    }

    #[must_use]
    pub fn ranges(&self) -> &[BankRange] {
        &self.ranges
    }
}

impl Default for PlantLayout {
    fn default() -> Self {
        Self::reference()
    }
}
