//! Real-time equipment enablement snapshot.
//!
//! The snapshot is one flat arena of [`EquipmentStatus`] slots split into
//! five fixed-size groups. Inside a group, slot index `i` (0-based) belongs
//! to the physical component with sequence number `i + 1`.
//!
//! | Group | Slots | Position | Device type |
//! |-------|-------|----------|-------------|
//! | top banks | 68 | top | bank |
//! | bottom banks | 68 | bottom | bank |
//! | top intensive devices | 24 | top | device |
//! | bottom intensive devices | 48 | bottom | device |
//! | sidesweeps | 8 | bottom | sidesweep |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::code::{DeviceType, VerticalPosition};
use crate::time::{Timestamp, now};

/// Banks per side in the plant.
pub const TOTAL_BANKS: usize = 68;
/// Devices mounted above the strip in the intensive zone.
pub const TOTAL_INTENSIVE_TOP_DEVICES: usize = 24;
/// Devices mounted below the strip in the intensive zone.
pub const TOTAL_INTENSIVE_BOTTOM_DEVICES: usize = 48;
pub const TOTAL_SIDESWEEPS: usize = 8;
/// Size of the whole snapshot arena.
pub const TOTAL_SLOTS: usize = 2 * TOTAL_BANKS
    + TOTAL_INTENSIVE_TOP_DEVICES
    + TOTAL_INTENSIVE_BOTTOM_DEVICES
    + TOTAL_SIDESWEEPS;

/// The two independent enablement flags of a component.
///
/// Unknown equipment is disabled: the default is `(false, false)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStatus {
    pub l1_enabled: bool,
    pub l2_enabled: bool,
}

impl EquipmentStatus {
    #[must_use]
    pub fn new(l1_enabled: bool, l2_enabled: bool) -> Self {
        Self {
            l1_enabled,
            l2_enabled,
        }
    }

    /// Both flags must be set for normal operational availability.
    #[must_use]
    pub fn is_available(self) -> bool {
        self.l1_enabled && self.l2_enabled
    }
}

/// One of the five slot collections of a [`CoolingProcessStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentGroup {
    TopBank,
    BottomBank,
    TopIntensiveDevice,
    BottomIntensiveDevice,
    Sidesweep,
}

impl EquipmentGroup {
    /// All groups in sweep order.
    pub const ALL: [Self; 5] = [
        Self::TopBank,
        Self::BottomBank,
        Self::TopIntensiveDevice,
        Self::BottomIntensiveDevice,
        Self::Sidesweep,
    ];

    /// Number of slots in this group.
    #[must_use]
    pub fn capacity(self) -> usize {
        match self {
            Self::TopBank | Self::BottomBank => TOTAL_BANKS,
            Self::TopIntensiveDevice => TOTAL_INTENSIVE_TOP_DEVICES,
            Self::BottomIntensiveDevice => TOTAL_INTENSIVE_BOTTOM_DEVICES,
            Self::Sidesweep => TOTAL_SIDESWEEPS,
        }
    }

    /// Physical sequence numbers `1..=capacity`, in slot order.
    pub fn sequence_numbers(self) -> impl Iterator<Item = u32> {
        (1..).take(self.capacity())
    }

    #[must_use]
    pub fn position(self) -> VerticalPosition {
        match self {
            Self::TopBank | Self::TopIntensiveDevice => VerticalPosition::Top,
            Self::BottomBank | Self::BottomIntensiveDevice | Self::Sidesweep => {
                VerticalPosition::Bottom
            }
        }
    }

    #[must_use]
    pub fn device_type(self) -> DeviceType {
        match self {
            Self::TopBank | Self::BottomBank => DeviceType::Bank,
            Self::TopIntensiveDevice | Self::BottomIntensiveDevice => DeviceType::Device,
            Self::Sidesweep => DeviceType::Sidesweep,
        }
    }

    /// Offset of the group's first slot inside the arena.
    fn offset(self) -> usize {
        Self::ALL
            .iter()
            .take_while(|&&group| group != self)
            .map(|group| group.capacity())
            .sum()
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::TopBank => "top_bank",
            Self::BottomBank => "bottom_bank",
            Self::TopIntensiveDevice => "top_intensive_device",
            Self::BottomIntensiveDevice => "bottom_intensive_device",
            Self::Sidesweep => "sidesweep",
        }
    }
}

impl fmt::Display for EquipmentGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown group name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown equipment group: {0}")]
pub struct UnknownGroupError(pub String);

impl FromStr for EquipmentGroup {
    type Err = UnknownGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| UnknownGroupError(s.to_string()))
    }
}

/// Physical sequence number of the component stored at slot `index`.
#[must_use]
pub fn sequence_no(index: usize) -> usize {
    index + 1
}

/// Snapshot of every component's enablement flags at one refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingProcessStatus {
    slots: Vec<EquipmentStatus>,
    refreshed_at: Timestamp,
}

impl Default for CoolingProcessStatus {
    fn default() -> Self {
        Self {
            slots: vec![EquipmentStatus::default(); TOTAL_SLOTS],
            refreshed_at: now(),
        }
    }
}

impl CoolingProcessStatus {
    /// A fresh snapshot with every slot disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// When this snapshot was created.
    #[must_use]
    pub fn refreshed_at(&self) -> Timestamp {
        self.refreshed_at
    }

    /// All slots of `group`, indexed from 0.
    #[must_use]
    pub fn slots(&self, group: EquipmentGroup) -> &[EquipmentStatus] {
        let start = group.offset();
        &self.slots[start..start + group.capacity()]
    }

    /// The slot at `index` of `group`, or `None` when out of range.
    #[must_use]
    pub fn slot(&self, group: EquipmentGroup, index: usize) -> Option<EquipmentStatus> {
        self.slots(group).get(index).copied()
    }

    /// Overwrite the slot at `index` of `group`.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn set(&mut self, group: EquipmentGroup, index: usize, status: EquipmentStatus) -> bool {
        if index >= group.capacity() {
            return false;
        }
        self.slots[group.offset() + index] = status;
        true
    }

    /// Components of `group` with the L1 flag set.
    #[must_use]
    pub fn enabled_count(&self, group: EquipmentGroup) -> usize {
        self.slots(group).iter().filter(|s| s.l1_enabled).count()
    }

    /// Components of `group` with both flags set.
    #[must_use]
    pub fn available_count(&self, group: EquipmentGroup) -> usize {
        self.slots(group).iter().filter(|s| s.is_available()).count()
    }

    /// Compare slot contents only, ignoring the refresh time.
    #[must_use]
    pub fn same_slots(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

#[derive(Serialize)]
struct StatusRepr<'a> {
    refreshed_at: Timestamp,
    top_banks: &'a [EquipmentStatus],
    bottom_banks: &'a [EquipmentStatus],
    top_intensive_devices: &'a [EquipmentStatus],
    bottom_intensive_devices: &'a [EquipmentStatus],
    sidesweeps: &'a [EquipmentStatus],
}

impl Serialize for CoolingProcessStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StatusRepr {
            refreshed_at: self.refreshed_at,
            top_banks: self.slots(EquipmentGroup::TopBank),
            bottom_banks: self.slots(EquipmentGroup::BottomBank),
            top_intensive_devices: self.slots(EquipmentGroup::TopIntensiveDevice),
            bottom_intensive_devices: self.slots(EquipmentGroup::BottomIntensiveDevice),
            sidesweeps: self.slots(EquipmentGroup::Sidesweep),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_size_groups_by_plant_constants() {
        assert_eq!(TOTAL_BANKS, 68);
        assert_eq!(TOTAL_INTENSIVE_TOP_DEVICES, 24);
        assert_eq!(TOTAL_INTENSIVE_BOTTOM_DEVICES, 48);
        assert_eq!(TOTAL_SIDESWEEPS, 8);
        assert_eq!(TOTAL_SLOTS, 216);

        let status = CoolingProcessStatus::new();
        for group in EquipmentGroup::ALL {
            assert_eq!(status.slots(group).len(), group.capacity());
        }
    }

    #[test]
    fn should_disable_every_slot_by_default() {
        let status = CoolingProcessStatus::default();
        for group in EquipmentGroup::ALL {
            assert!(
                status
                    .slots(group)
                    .iter()
                    .all(|s| *s == EquipmentStatus::new(false, false))
            );
            assert_eq!(status.enabled_count(group), 0);
        }
    }

    #[test]
    fn should_keep_groups_independent_in_arena() {
        let mut status = CoolingProcessStatus::new();
        assert!(status.set(EquipmentGroup::BottomBank, 0, EquipmentStatus::new(true, true)));

        assert_eq!(
            status.slot(EquipmentGroup::TopBank, 0),
            Some(EquipmentStatus::default())
        );
        assert_eq!(
            status.slot(EquipmentGroup::TopBank, TOTAL_BANKS - 1),
            Some(EquipmentStatus::default())
        );
        assert_eq!(
            status.slot(EquipmentGroup::BottomBank, 0),
            Some(EquipmentStatus::new(true, true))
        );
    }

    #[test]
    fn should_address_last_sidesweep_slot() {
        let mut status = CoolingProcessStatus::new();
        assert!(status.set(EquipmentGroup::Sidesweep, 7, EquipmentStatus::new(true, false)));
        assert!(!status.set(EquipmentGroup::Sidesweep, 8, EquipmentStatus::new(true, false)));
        assert_eq!(status.enabled_count(EquipmentGroup::Sidesweep), 1);
        assert_eq!(status.available_count(EquipmentGroup::Sidesweep), 0);
        assert_eq!(status.slot(EquipmentGroup::Sidesweep, 8), None);
    }

    #[test]
    fn should_map_groups_to_lookup_keys() {
        assert_eq!(EquipmentGroup::TopBank.position(), VerticalPosition::Top);
        assert_eq!(EquipmentGroup::TopBank.device_type(), DeviceType::Bank);
        assert_eq!(
            EquipmentGroup::BottomIntensiveDevice.device_type(),
            DeviceType::Device
        );
        assert_eq!(
            EquipmentGroup::Sidesweep.position(),
            VerticalPosition::Bottom
        );
        assert_eq!(
            EquipmentGroup::Sidesweep.device_type(),
            DeviceType::Sidesweep
        );
    }

    #[test]
    fn should_map_index_to_sequence_number() {
        assert_eq!(sequence_no(0), 1);
        assert_eq!(sequence_no(67), 68);
    }

    #[test]
    fn should_list_every_sequence_number_of_group() {
        assert_eq!(
            EquipmentGroup::Sidesweep.sequence_numbers().collect::<Vec<_>>(),
            (1..=8).collect::<Vec<u32>>()
        );
        for group in EquipmentGroup::ALL {
            let numbers: Vec<u32> = group.sequence_numbers().collect();
            assert_eq!(numbers.len(), group.capacity());
            for (index, seq) in numbers.into_iter().enumerate() {
                assert_eq!(usize::try_from(seq).unwrap(), sequence_no(index));
            }
        }
    }

    #[test]
    fn should_compare_slots_ignoring_refresh_time() {
        let a = CoolingProcessStatus::new();
        let b = CoolingProcessStatus::new();
        assert!(a.same_slots(&b));

        let mut c = CoolingProcessStatus::new();
        c.set(EquipmentGroup::TopIntensiveDevice, 3, EquipmentStatus::new(false, true));
        assert!(!a.same_slots(&c));
    }

    #[test]
    fn should_parse_group_names() {
        assert_eq!(
            "bottom_intensive_device".parse::<EquipmentGroup>().unwrap(),
            EquipmentGroup::BottomIntensiveDevice
        );
        assert!("nozzle".parse::<EquipmentGroup>().is_err());
    }

    #[test]
    fn should_serialize_groups_as_named_arrays() {
        let json = serde_json::to_value(CoolingProcessStatus::new()).unwrap();
        assert_eq!(json["top_banks"].as_array().unwrap().len(), 68);
        assert_eq!(json["sidesweeps"].as_array().unwrap().len(), 8);
        assert_eq!(json["top_banks"][0]["l1_enabled"], false);
    }
}
