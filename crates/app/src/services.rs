//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod status_aggregator;
pub mod status_poller;
pub mod status_publisher;
pub mod zone_assembler;

use rotcool_domain::notification::{Notification, NotificationKind};

use crate::ports::NotificationSink;

/// Publish `kind` on `sink`, logging instead of failing when delivery fails.
pub(crate) async fn notify<N: NotificationSink>(sink: &N, kind: NotificationKind) {
    if let Err(err) = sink.publish(Notification::new(kind)).await {
        tracing::warn!(error = %err, "failed to publish notification");
    }
}
