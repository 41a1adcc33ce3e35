//! Shared application state for axum handlers.

use std::sync::Arc;

use rotcool_app::notification_bus::InProcessNotificationBus;
use rotcool_app::services::status_publisher::StatusPublisher;
use rotcool_domain::process::CoolingProcess;

/// Application state shared across all axum handlers.
///
/// The process is assembled once at startup and never changes; the status
/// publisher always hands out the snapshot published most recently.
#[derive(Clone)]
pub struct AppState {
    /// The cooling process assembled at startup.
    pub process: Arc<CoolingProcess>,
    /// Source of the latest equipment-status snapshot.
    pub status: Arc<StatusPublisher>,
    /// Bus carrying assembly and refresh notifications.
    pub notifications: Arc<InProcessNotificationBus>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(
        process: CoolingProcess,
        status: Arc<StatusPublisher>,
        notifications: Arc<InProcessNotificationBus>,
    ) -> Self {
        Self {
            process: Arc::new(process),
            status,
            notifications,
        }
    }
}
