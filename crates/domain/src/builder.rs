//! Fluent construction of a fully hydrated cooling process.
//!
//! The builder lays out the zone → unit → bank → device hierarchy with
//! plant-wide numbering: banks are numbered per side starting at 1 in plant
//! order (intensive, standard, trimming), intensive devices are numbered per
//! side starting at 1 so that they line up with the equipment-status slots.
//!
//! Startup assembly from the plant database does not use this builder; it
//! only populates zone scalars.
//!
//! [`EquipmentStatusBuilder`] is the matching fixture builder for status
//! snapshots.

use crate::bank::{CoolingBank, IntensiveCoolingBank};
use crate::code::VerticalPosition;
use crate::device::CoolingDevice;
use crate::error::ValidationError;
use crate::layout::PlantLayout;
use crate::process::{CoolingProcess, PyrometerPositions};
use crate::status::{CoolingProcessStatus, EquipmentGroup, EquipmentStatus};
use crate::unit::{IntensiveCoolingUnit, StandardCoolingUnit, TrimmingCoolingUnit};
use crate::zone::{
    IntensiveCoolingZone, StandardCoolingZone, TrimmingCoolingZone, ZoneSpec, ZoneType,
};

const BANK_LENGTH: f32 = 1_500.0;
const DEVICE_WET_LENGTH: f32 = 600.0;
const DEFAULT_WIDTH: f32 = 2_000.0;
const DEFAULT_PRESSURE: f32 = 0.95;
const DEFAULT_WATER_TEMPERATURE: f32 = 21.0;

/// Unit count and bank/device density of one zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneShape {
    pub units: u32,
    pub banks_per_unit: u32,
    /// Devices per top intensive bank (ignored outside the intensive zone).
    pub top_devices_per_bank: u32,
    /// Devices per bottom intensive bank (ignored outside the intensive zone).
    pub bottom_devices_per_bank: u32,
    /// Unit length in millimetres.
    pub unit_length: f32,
}

impl ZoneShape {
    #[must_use]
    pub fn new(units: u32, banks_per_unit: u32) -> Self {
        Self {
            units,
            banks_per_unit,
            top_devices_per_bank: 0,
            bottom_devices_per_bank: 0,
            unit_length: banks_per_unit as f32 * BANK_LENGTH,
        }
    }

    #[must_use]
    pub fn with_devices(mut self, top_per_bank: u32, bottom_per_bank: u32) -> Self {
        self.top_devices_per_bank = top_per_bank;
        self.bottom_devices_per_bank = bottom_per_bank;
        self
    }

    #[must_use]
    pub fn with_unit_length(mut self, unit_length: f32) -> Self {
        self.unit_length = unit_length;
        self
    }
}

/// Step-by-step builder for [`CoolingProcess`].
#[derive(Debug, Clone)]
pub struct CoolingProcessBuilder {
    pyrometers: PyrometerPositions,
    width: f32,
    main_pressure: f32,
    water_temperature: f32,
    intensive: Option<ZoneShape>,
    standard: Option<ZoneShape>,
    trimming: Option<ZoneShape>,
}

impl Default for CoolingProcessBuilder {
    fn default() -> Self {
        Self {
            pyrometers: PyrometerPositions {
                entry_scan: 0.0,
                entry: 2_500.0,
                inter: 30_000.0,
                exit: 95_000.0,
                exit_scan: 97_000.0,
                ..PyrometerPositions::default()
            },
            width: DEFAULT_WIDTH,
            main_pressure: DEFAULT_PRESSURE,
            water_temperature: DEFAULT_WATER_TEMPERATURE,
            intensive: None,
            standard: None,
            trimming: None,
        }
    }
}

/// Running plant-wide counters while the hierarchy is laid out.
#[derive(Default)]
struct Numbering {
    bank_no: u32,
    top_device_no: u32,
    bottom_device_no: u32,
}

impl CoolingProcessBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pyrometers(mut self, pyrometers: PyrometerPositions) -> Self {
        self.pyrometers = pyrometers;
        self
    }

    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn main_pressure(mut self, main_pressure: f32) -> Self {
        self.main_pressure = main_pressure;
        self
    }

    #[must_use]
    pub fn water_temperature(mut self, water_temperature: f32) -> Self {
        self.water_temperature = water_temperature;
        self
    }

    #[must_use]
    pub fn intensive_zone(mut self, shape: ZoneShape) -> Self {
        self.intensive = Some(shape);
        self
    }

    #[must_use]
    pub fn standard_zone(mut self, shape: ZoneShape) -> Self {
        self.standard = Some(shape);
        self
    }

    #[must_use]
    pub fn trimming_zone(mut self, shape: ZoneShape) -> Self {
        self.trimming = Some(shape);
        self
    }

    /// The reference plant: 3 intensive units of 4 banks (2 top / 4 bottom
    /// devices per bank), 6 standard units of 4 banks and 8 trimming units of
    /// 4 banks. 68 banks per side, 24 top and 48 bottom intensive devices.
    #[must_use]
    pub fn reference_plant() -> Self {
        Self::new()
            .intensive_zone(
                ZoneShape::new(3, 4)
                    .with_devices(2, 4)
                    .with_unit_length(4_000.0),
            )
            .standard_zone(ZoneShape::new(6, 4).with_unit_length(5_000.0))
            .trimming_zone(ZoneShape::new(8, 4).with_unit_length(4_000.0))
    }

    /// Consume the builder and lay out the hierarchy.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::CapacityExceeded`] when a shape asks for
    /// more banks per unit or devices per bank than the variant allows.
    pub fn build(self) -> Result<CoolingProcess, ValidationError> {
        let mut numbering = Numbering::default();
        let mut zone_seq = 0;
        let mut next_spec = |zone_type: ZoneType, shape: &ZoneShape| {
            zone_seq += 1;
            ZoneSpec {
                zone_id: zone_type.to_string().to_uppercase(),
                zone_no: zone_seq,
                zone_seq,
                num_units: shape.units,
                length: shape.units as f32 * shape.unit_length,
                width: self.width,
                main_pressure: self.main_pressure,
                water_temperature: self.water_temperature,
            }
        };

        let intensive_spec = self
            .intensive
            .as_ref()
            .map(|shape| next_spec(ZoneType::Intensive, shape));
        let standard_spec = self
            .standard
            .as_ref()
            .map(|shape| next_spec(ZoneType::Standard, shape));
        let trimming_spec = self
            .trimming
            .as_ref()
            .map(|shape| next_spec(ZoneType::Trimming, shape));

        let mut process = CoolingProcess {
            pyrometers: self.pyrometers,
            ..CoolingProcess::default()
        };

        if let (Some(shape), Some(spec)) = (&self.intensive, intensive_spec) {
            process.intensive_zone = Some(self.lay_out_intensive(shape, spec, &mut numbering)?);
        }
        if let (Some(shape), Some(spec)) = (&self.standard, standard_spec) {
            process.standard_zone = Some(self.lay_out_standard(shape, spec, &mut numbering)?);
        }
        if let (Some(shape), Some(spec)) = (&self.trimming, trimming_spec) {
            process.trimming_zone = Some(self.lay_out_trimming(shape, spec, &mut numbering)?);
        }
        Ok(process)
    }

    fn bank(&self, bank_no: u32, bank_seq: u32, position: VerticalPosition) -> CoolingBank {
        CoolingBank {
            length: BANK_LENGTH,
            width: self.width,
            main_pressure: self.main_pressure,
            water_temperature: self.water_temperature,
            ..CoolingBank::new(bank_no, bank_seq, position)
        }
    }

    fn lay_out_intensive(
        &self,
        shape: &ZoneShape,
        spec: ZoneSpec,
        numbering: &mut Numbering,
    ) -> Result<IntensiveCoolingZone, ValidationError> {
        let mut zone = IntensiveCoolingZone::new(spec);
        for u in 1..=shape.units {
            let mut unit = IntensiveCoolingUnit::new(u, u);
            unit.length = shape.unit_length;
            unit.width = self.width;
            for b in 1..=shape.banks_per_unit {
                numbering.bank_no += 1;

                let mut top = IntensiveCoolingBank::new(self.bank(
                    numbering.bank_no,
                    b,
                    VerticalPosition::Top,
                ));
                for d in 1..=shape.top_devices_per_bank {
                    numbering.top_device_no += 1;
                    top.add_top_device(
                        CoolingDevice::new(numbering.top_device_no, d, "U-Tube")
                            .with_wet_length(DEVICE_WET_LENGTH),
                    )?;
                }

                let mut bottom = IntensiveCoolingBank::new(self.bank(
                    numbering.bank_no,
                    b,
                    VerticalPosition::Bottom,
                ));
                for d in 1..=shape.bottom_devices_per_bank {
                    numbering.bottom_device_no += 1;
                    bottom.add_bottom_device(
                        CoolingDevice::new(numbering.bottom_device_no, d, "Bottom Spray")
                            .with_wet_length(DEVICE_WET_LENGTH),
                    )?;
                }

                unit.add_bank(VerticalPosition::Top, top)?;
                unit.add_bank(VerticalPosition::Bottom, bottom)?;
            }
            zone.units.push(unit);
        }
        Ok(zone)
    }

    fn lay_out_standard(
        &self,
        shape: &ZoneShape,
        spec: ZoneSpec,
        numbering: &mut Numbering,
    ) -> Result<StandardCoolingZone, ValidationError> {
        let mut zone = StandardCoolingZone::new(spec);
        for u in 1..=shape.units {
            let mut unit = StandardCoolingUnit::new(u, u);
            unit.length = shape.unit_length;
            unit.width = self.width;
            for b in 1..=shape.banks_per_unit {
                numbering.bank_no += 1;
                unit.add_bank(
                    VerticalPosition::Top,
                    self.bank(numbering.bank_no, b, VerticalPosition::Top),
                )?;
                unit.add_bank(
                    VerticalPosition::Bottom,
                    self.bank(numbering.bank_no, b, VerticalPosition::Bottom),
                )?;
            }
            zone.units.push(unit);
        }
        Ok(zone)
    }

    fn lay_out_trimming(
        &self,
        shape: &ZoneShape,
        spec: ZoneSpec,
        numbering: &mut Numbering,
    ) -> Result<TrimmingCoolingZone, ValidationError> {
        let mut zone = TrimmingCoolingZone::new(spec);
        for u in 1..=shape.units {
            let mut unit = TrimmingCoolingUnit::new(u, u);
            unit.length = shape.unit_length;
            unit.width = self.width;
            for b in 1..=shape.banks_per_unit {
                numbering.bank_no += 1;
                unit.add_bank(
                    VerticalPosition::Top,
                    self.bank(numbering.bank_no, b, VerticalPosition::Top),
                )?;
                unit.add_bank(
                    VerticalPosition::Bottom,
                    self.bank(numbering.bank_no, b, VerticalPosition::Bottom),
                )?;
            }
            zone.units.push(unit);
        }
        Ok(zone)
    }
}

/// Fluent construction of [`CoolingProcessStatus`] snapshots.
///
/// Starts from the all-disabled snapshot. Bank numbers are 1-based; numbers
/// outside `1..=68` are ignored.
#[derive(Debug, Default)]
pub struct EquipmentStatusBuilder {
    status: CoolingProcessStatus,
}

impl EquipmentStatusBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable both levels of every bank, intensive device and sidesweep.
    #[must_use]
    pub fn all_enabled(mut self) -> Self {
        for group in EquipmentGroup::ALL {
            for index in 0..group.capacity() {
                self.status
                    .set(group, index, EquipmentStatus::new(true, true));
            }
        }
        self
    }

    /// Reset every slot to disabled.
    #[must_use]
    pub fn all_disabled(mut self) -> Self {
        self.status = CoolingProcessStatus::new();
        self
    }

    #[must_use]
    pub fn disable_top_bank(self, bank_no: u32) -> Self {
        self.bank(EquipmentGroup::TopBank, bank_no, EquipmentStatus::default())
    }

    #[must_use]
    pub fn disable_bottom_bank(self, bank_no: u32) -> Self {
        self.bank(EquipmentGroup::BottomBank, bank_no, EquipmentStatus::default())
    }

    /// L1 enabled with L2 disabled on one top bank.
    #[must_use]
    pub fn top_bank_l1_only_enabled(self, bank_no: u32) -> Self {
        self.bank(
            EquipmentGroup::TopBank,
            bank_no,
            EquipmentStatus::new(true, false),
        )
    }

    /// Disable everything, then enable both sides of the banks `layout`
    /// assigns to `zone_type`. Leaves everything disabled when the layout
    /// has no such zone.
    #[must_use]
    pub fn only_zone_enabled(self, layout: &PlantLayout, zone_type: ZoneType) -> Self {
        let mut builder = self.all_disabled();
        if let Some(range) = layout.range(zone_type) {
            for bank_no in range.banks() {
                let enabled = EquipmentStatus::new(true, true);
                builder = builder
                    .bank(EquipmentGroup::TopBank, bank_no, enabled)
                    .bank(EquipmentGroup::BottomBank, bank_no, enabled);
            }
        }
        builder
    }

    #[must_use]
    pub fn build(self) -> CoolingProcessStatus {
        self.status
    }

    fn bank(mut self, group: EquipmentGroup, bank_no: u32, status: EquipmentStatus) -> Self {
        if let Some(index) = bank_no
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
        {
            self.status.set(group, index, status);
        }
        self
    }
}
