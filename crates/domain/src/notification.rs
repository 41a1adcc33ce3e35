//! Notifications: progress records emitted by the assembly and status
//! refresh use-cases.
//!
//! Consumers (operator displays, tests) subscribe to them; producers never
//! wait on delivery.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, now};
use crate::zone::ZoneType;

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationKind {
    AssemblyStarted { expected: u32 },
    ZoneClassified { zone_no: u32, zone_type: ZoneType },
    AssemblyCompleted { zones: usize },
    AssemblyFailed { reason: String },
    StatusRefreshStarted,
    StatusRefreshCompleted {
        enabled_top_banks: usize,
        enabled_bottom_banks: usize,
    },
}

/// A timestamped [`NotificationKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(flatten)]
    pub kind: NotificationKind,
    pub timestamp: Timestamp,
}

impl Notification {
    /// Stamp `kind` with the current time.
    #[must_use]
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            kind,
            timestamp: now(),
        }
    }
}

impl From<NotificationKind> for Notification {
    fn from(kind: NotificationKind) -> Self {
        Self::new(kind)
    }
}
