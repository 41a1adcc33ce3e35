//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod equipment_status;
pub mod notification;
pub mod zone_config;

pub use equipment_status::{EquipmentStatusSource, StatusRecord};
pub use notification::NotificationSink;
pub use zone_config::{ZoneConfigSource, ZoneRecord};
