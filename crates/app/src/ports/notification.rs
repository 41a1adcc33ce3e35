//! Notification port: operational progress for logging and messaging
//! collaborators.

use std::future::Future;

use rotcool_domain::error::CoolingError;
use rotcool_domain::notification::Notification;

/// Delivers notifications to interested subscribers.
pub trait NotificationSink {
    /// Publish a notification to all current subscribers.
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CoolingError>> + Send;
}

impl<T: NotificationSink + Send + Sync> NotificationSink for std::sync::Arc<T> {
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CoolingError>> + Send {
        (**self).publish(notification)
    }
}
