//! Cooling banks: rows of spray devices at a fixed longitudinal position.

use serde::{Deserialize, Serialize};

use crate::code::VerticalPosition;
use crate::device::CoolingDevice;
use crate::error::ValidationError;

/// Append `item` unless `items` already holds `max` elements.
pub(crate) fn push_bounded<T>(
    items: &mut Vec<T>,
    item: T,
    max: usize,
    container: &'static str,
    side: &'static str,
) -> Result<(), ValidationError> {
    if items.len() >= max {
        return Err(ValidationError::CapacityExceeded {
            container,
            side,
            max,
        });
    }
    items.push(item);
    Ok(())
}

/// A bank without device sub-structure (standard and trimming zones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingBank {
    /// Plant-wide bank number.
    pub bank_no: u32,
    /// Position of the bank within its unit (1-based).
    pub bank_seq: u32,
    pub position: VerticalPosition,
    /// Length in millimetres.
    pub length: f32,
    /// Width in millimetres.
    pub width: f32,
    pub main_pressure: f32,
    pub water_temperature: f32,
}

impl CoolingBank {
    #[must_use]
    pub fn new(bank_no: u32, bank_seq: u32, position: VerticalPosition) -> Self {
        Self {
            bank_no,
            bank_seq,
            position,
            length: 0.0,
            width: 0.0,
            main_pressure: 0.0,
            water_temperature: 0.0,
        }
    }
}

/// An intensive-zone bank that additionally owns top and bottom devices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntensiveCoolingBank {
    #[serde(flatten)]
    pub bank: CoolingBank,
    top_devices: Vec<CoolingDevice>,
    bottom_devices: Vec<CoolingDevice>,
}

impl IntensiveCoolingBank {
    pub const MAX_TOP_DEVICES: usize = 4;
    pub const MAX_BOTTOM_DEVICES: usize = 4;

    #[must_use]
    pub fn new(bank: CoolingBank) -> Self {
        Self {
            bank,
            top_devices: Vec::new(),
            bottom_devices: Vec::new(),
        }
    }

    /// Attach a device above the strip.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CapacityExceeded`] past [`Self::MAX_TOP_DEVICES`].
    pub fn add_top_device(&mut self, device: CoolingDevice) -> Result<(), ValidationError> {
        push_bounded(
            &mut self.top_devices,
            device,
            Self::MAX_TOP_DEVICES,
            "intensive bank",
            "top devices",
        )
    }

    /// Attach a device below the strip.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CapacityExceeded`] past [`Self::MAX_BOTTOM_DEVICES`].
    pub fn add_bottom_device(&mut self, device: CoolingDevice) -> Result<(), ValidationError> {
        push_bounded(
            &mut self.bottom_devices,
            device,
            Self::MAX_BOTTOM_DEVICES,
            "intensive bank",
            "bottom devices",
        )
    }

    /// Attach a device on the given side.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CapacityExceeded`] when that side is full.
    pub fn add_device(
        &mut self,
        position: VerticalPosition,
        device: CoolingDevice,
    ) -> Result<(), ValidationError> {
        match position {
            VerticalPosition::Top => self.add_top_device(device),
            VerticalPosition::Bottom => self.add_bottom_device(device),
        }
    }

    #[must_use]
    pub fn top_devices(&self) -> &[CoolingDevice] {
        &self.top_devices
    }

    #[must_use]
    pub fn bottom_devices(&self) -> &[CoolingDevice] {
        &self.bottom_devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensive_bank() -> IntensiveCoolingBank {
        IntensiveCoolingBank::new(CoolingBank::new(1, 1, VerticalPosition::Top))
    }

    #[test]
    fn should_accept_devices_up_to_capacity() {
        let mut bank = intensive_bank();
        for seq in 1..=4 {
            bank.add_top_device(CoolingDevice::new(seq, seq, "U-Tube"))
                .unwrap();
        }
        assert_eq!(bank.top_devices().len(), IntensiveCoolingBank::MAX_TOP_DEVICES);
        assert!(bank.bottom_devices().is_empty());
    }

    #[test]
    fn should_reject_fifth_bottom_device() {
        let mut bank = intensive_bank();
        for seq in 1..=4 {
            bank.add_bottom_device(CoolingDevice::new(seq, seq, "Bottom Spray"))
                .unwrap();
        }
        let result = bank.add_bottom_device(CoolingDevice::new(5, 5, "Bottom Spray"));
        assert_eq!(
            result,
            Err(ValidationError::CapacityExceeded {
                container: "intensive bank",
                side: "bottom devices",
                max: 4,
            })
        );
    }

    #[test]
    fn should_route_device_by_position() {
        let mut bank = intensive_bank();
        bank.add_device(VerticalPosition::Bottom, CoolingDevice::new(1, 1, "Bottom Spray"))
            .unwrap();
        assert_eq!(bank.bottom_devices().len(), 1);
        assert!(bank.top_devices().is_empty());
    }

    #[test]
    fn should_flatten_base_bank_fields_in_json() {
        let json = serde_json::to_value(intensive_bank()).unwrap();
        assert_eq!(json["bank_no"], 1);
        assert_eq!(json["position"], "top");
        assert!(json["top_devices"].as_array().unwrap().is_empty());
    }
}
