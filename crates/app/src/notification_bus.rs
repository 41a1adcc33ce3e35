//! Fan-out of assembly and refresh progress to live listeners.
//!
//! Notifications are operational only. Nobody acknowledges them, and
//! neither assembly nor a status refresh waits for a listener.

use std::future::Future;

use tokio::sync::broadcast;

use rotcool_domain::error::CoolingError;
use rotcool_domain::notification::Notification;

use crate::ports::NotificationSink;

/// [`NotificationSink`] that hands every notification to the listeners
/// connected at publish time, such as the SSE stream.
///
/// Each listener buffers at most `capacity` notifications; a slow listener
/// loses the oldest ones and is told how many it missed.
pub struct InProcessNotificationBus {
    listeners: broadcast::Sender<Notification>,
}

impl InProcessNotificationBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (listeners, _) = broadcast::channel(capacity);
        Self { listeners }
    }

    /// Start listening. Earlier notifications are not replayed.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.listeners.subscribe()
    }
}

impl NotificationSink for InProcessNotificationBus {
    /// Never fails: with nobody listening the notification is discarded.
    fn publish(
        &self,
        notification: Notification,
    ) -> impl Future<Output = Result<(), CoolingError>> + Send {
        if self.listeners.send(notification).is_err() {
            tracing::trace!("notification discarded, no listener connected");
        }
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotcool_domain::notification::NotificationKind;

    #[tokio::test]
    async fn should_hand_notification_to_connected_listener() {
        let bus = InProcessNotificationBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Notification::new(NotificationKind::AssemblyStarted {
            expected: 3,
        }))
        .await
        .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(
            received.kind,
            NotificationKind::AssemblyStarted { expected: 3 }
        );
    }

    #[tokio::test]
    async fn should_fan_out_to_every_listener() {
        let bus = InProcessNotificationBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Notification::new(NotificationKind::StatusRefreshStarted))
            .await
            .unwrap();

        assert_eq!(
            rx1.recv().await.unwrap().kind,
            NotificationKind::StatusRefreshStarted
        );
        assert_eq!(
            rx2.recv().await.unwrap().kind,
            NotificationKind::StatusRefreshStarted
        );
    }

    #[tokio::test]
    async fn should_discard_silently_when_nobody_listens() {
        let bus = InProcessNotificationBus::new(16);
        let result = bus
            .publish(Notification::new(NotificationKind::StatusRefreshStarted))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_replay_notifications_to_late_listener() {
        let bus = InProcessNotificationBus::new(16);
        bus.publish(Notification::new(NotificationKind::StatusRefreshStarted))
            .await
            .unwrap();

        let mut rx = bus.subscribe();
        bus.publish(Notification::new(NotificationKind::AssemblyCompleted {
            zones: 2,
        }))
        .await
        .unwrap();

        assert_eq!(
            rx.recv().await.unwrap().kind,
            NotificationKind::AssemblyCompleted { zones: 2 }
        );
    }

    #[tokio::test]
    async fn should_report_missed_notifications_to_slow_listener() {
        let bus = InProcessNotificationBus::new(2);
        let mut rx = bus.subscribe();

        for expected in 1..=3 {
            bus.publish(Notification::new(NotificationKind::AssemblyStarted {
                expected,
            }))
            .await
            .unwrap();
        }

        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
        assert_eq!(
            rx.recv().await.unwrap().kind,
            NotificationKind::AssemblyStarted { expected: 2 }
        );
    }
}
