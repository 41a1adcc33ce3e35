//! Status poller: refreshes and publishes the snapshot on a fixed period.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ports::{EquipmentStatusSource, NotificationSink};
use crate::services::status_aggregator::StatusAggregator;
use crate::services::status_publisher::StatusPublisher;

/// Background refresh loop around a [`StatusAggregator`].
pub struct StatusPoller<S, N> {
    aggregator: Arc<StatusAggregator<S, N>>,
    publisher: Arc<StatusPublisher>,
    period: Duration,
}

impl<S, N> StatusPoller<S, N>
where
    S: EquipmentStatusSource + Send + Sync + 'static,
    N: NotificationSink + Send + Sync + 'static,
{
    pub fn new(
        aggregator: Arc<StatusAggregator<S, N>>,
        publisher: Arc<StatusPublisher>,
        period: Duration,
    ) -> Self {
        Self {
            aggregator,
            publisher,
            period,
        }
    }

    /// Run one refresh and publish its snapshot.
    ///
    /// Returns `false` when the refresh failed; the previously published
    /// snapshot then stays in place.
    pub async fn poll_once(&self) -> bool {
        match self.aggregator.refresh_status().await {
            Ok(snapshot) => {
                self.publisher.publish(snapshot);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "status refresh failed, keeping previous snapshot");
                false
            }
        }
    }

    /// Refresh every period, starting one period from now. Never returns.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.poll_once().await;
        }
    }

    /// Spawn [`run`](Self::run) on the current runtime. Abort the handle to stop.
    pub fn spawn(self) -> JoinHandle<()> {
        tracing::info!(period_ms = self.period.as_millis(), "status poller started");
        tokio::spawn(self.run())
    }
}
