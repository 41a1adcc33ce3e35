//! Status publisher: hands the latest snapshot to readers by reference swap.
//!
//! Snapshots are never mutated after publication; a refresh builds a new
//! [`CoolingProcessStatus`] and replaces the shared `Arc` in one step.

use std::sync::Arc;

use tokio::sync::watch;

use rotcool_domain::status::CoolingProcessStatus;

/// Single-writer, many-reader holder of the current snapshot.
pub struct StatusPublisher {
    sender: watch::Sender<Arc<CoolingProcessStatus>>,
}

impl Default for StatusPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusPublisher {
    /// Start with the default snapshot (every slot disabled).
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Arc::new(CoolingProcessStatus::default()));
        Self { sender }
    }

    /// Replace the current snapshot. Readers holding the previous one keep it.
    pub fn publish(&self, snapshot: CoolingProcessStatus) {
        self.sender.send_replace(Arc::new(snapshot));
    }

    /// The snapshot published most recently.
    #[must_use]
    pub fn latest(&self) -> Arc<CoolingProcessStatus> {
        Arc::clone(&self.sender.borrow())
    }

    /// Receiver notified on every publication.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Arc<CoolingProcessStatus>> {
        self.sender.subscribe()
    }
}
