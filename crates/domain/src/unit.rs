//! Cooling units: physical groupings of top and bottom banks.
//!
//! Each zone type has its own unit variant. The variant fixes both the bank
//! capacity and the bank type it may hold: intensive units hold
//! [`IntensiveCoolingBank`]s, standard and trimming units hold plain
//! [`CoolingBank`]s.

use serde::{Deserialize, Serialize};

use crate::bank::{CoolingBank, IntensiveCoolingBank, push_bounded};
use crate::code::VerticalPosition;
use crate::error::ValidationError;

macro_rules! define_unit {
    ($(#[doc = $doc:expr])* $name:ident, $bank:ty, $label:literal, $max:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            pub unit_no: u32,
            /// Position of the unit within its zone (1-based).
            pub unit_seq: u32,
            /// Length in millimetres.
            pub length: f32,
            /// Width in millimetres.
            pub width: f32,
            top_banks: Vec<$bank>,
            bottom_banks: Vec<$bank>,
        }

        impl $name {
            pub const MAX_TOP_BANKS: usize = $max;
            pub const MAX_BOTTOM_BANKS: usize = $max;

            #[must_use]
            pub fn new(unit_no: u32, unit_seq: u32) -> Self {
                Self {
                    unit_no,
                    unit_seq,
                    length: 0.0,
                    width: 0.0,
                    top_banks: Vec::new(),
                    bottom_banks: Vec::new(),
                }
            }

            /// Attach a bank on the given side of the strip.
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::CapacityExceeded`] when that side
            /// already holds the maximum number of banks.
            pub fn add_bank(
                &mut self,
                position: VerticalPosition,
                bank: $bank,
            ) -> Result<(), ValidationError> {
                match position {
                    VerticalPosition::Top => push_bounded(
                        &mut self.top_banks,
                        bank,
                        Self::MAX_TOP_BANKS,
                        $label,
                        "top banks",
                    ),
                    VerticalPosition::Bottom => push_bounded(
                        &mut self.bottom_banks,
                        bank,
                        Self::MAX_BOTTOM_BANKS,
                        $label,
                        "bottom banks",
                    ),
                }
            }

            #[must_use]
            pub fn top_banks(&self) -> &[$bank] {
                &self.top_banks
            }

            #[must_use]
            pub fn bottom_banks(&self) -> &[$bank] {
                &self.bottom_banks
            }
        }
    };
}

define_unit!(
    /// Unit of the intensive zone: up to 8 top and 8 bottom intensive banks.
    IntensiveCoolingUnit,
    IntensiveCoolingBank,
    "intensive unit",
    8
);

define_unit!(
    /// Unit of the standard zone: up to 6 top and 6 bottom banks.
    StandardCoolingUnit,
    CoolingBank,
    "standard unit",
    6
);

define_unit!(
    /// Unit of the trimming zone: up to 4 top and 4 bottom banks.
    TrimmingCoolingUnit,
    CoolingBank,
    "trimming unit",
    4
);
