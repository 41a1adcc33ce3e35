//! Cooling device: an individual nozzle or spray header inside an intensive bank.

use serde::{Deserialize, Serialize};

/// Nominal flow efficiency multiplier.
pub const NOMINAL_EFFICIENCY: f32 = 1.0;

/// A single spray element. Owned by exactly one [`IntensiveCoolingBank`](crate::bank::IntensiveCoolingBank).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingDevice {
    /// Sequence number of the device.
    pub device_no: u32,
    /// Position of the device within its bank (1-based).
    pub device_seq: u32,
    /// Raw device type code as configured for the plant.
    pub device_type: i32,
    pub description: String,
    /// Wetted length in millimetres.
    pub wet_length: f32,
    /// Flow efficiency multiplier, `>= 0`; `1.0` is nominal flow.
    pub efficiency: f32,
}

impl CoolingDevice {
    /// Create a device running at nominal efficiency.
    #[must_use]
    pub fn new(device_no: u32, device_seq: u32, description: impl Into<String>) -> Self {
        Self {
            device_no,
            device_seq,
            device_type: crate::code::DeviceType::Device.code(),
            description: description.into(),
            wet_length: 0.0,
            efficiency: NOMINAL_EFFICIENCY,
        }
    }

    /// Set the wetted length in millimetres.
    #[must_use]
    pub fn with_wet_length(mut self, wet_length: f32) -> Self {
        self.wet_length = wet_length;
        self
    }

    /// Set the efficiency multiplier. Negative values are clamped to zero.
    #[must_use]
    pub fn with_efficiency(mut self, efficiency: f32) -> Self {
        self.efficiency = efficiency.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_nominal_efficiency() {
        let device = CoolingDevice::new(1, 1, "U-Tube");
        assert!((device.efficiency - NOMINAL_EFFICIENCY).abs() < f32::EPSILON);
        assert_eq!(device.device_type, 1);
    }

    #[test]
    fn should_clamp_negative_efficiency_to_zero() {
        let device = CoolingDevice::new(1, 1, "U-Tube").with_efficiency(-0.5);
        assert!(device.efficiency.abs() < f32::EPSILON);
    }
}
