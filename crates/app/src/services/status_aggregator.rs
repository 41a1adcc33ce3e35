//! Equipment status aggregator: sweeps every status slot into a fresh
//! snapshot.
//!
//! One lookup is issued per slot, sequentially, in the order of
//! [`EquipmentGroup::ALL`]. A missing record leaves its slot disabled and
//! never stops the sweep.

use rotcool_domain::error::CoolingError;
use rotcool_domain::notification::NotificationKind;
use rotcool_domain::status::{CoolingProcessStatus, EquipmentGroup};
use rotcool_domain::time::elapsed_ms;

use crate::ports::{EquipmentStatusSource, NotificationSink};
use crate::services::notify;

/// Application service building [`CoolingProcessStatus`] snapshots.
pub struct StatusAggregator<S, N> {
    source: S,
    notifier: N,
}

impl<S, N> StatusAggregator<S, N>
where
    S: EquipmentStatusSource + Sync,
    N: NotificationSink + Sync,
{
    /// Create a new aggregator reading from `source` and reporting to `notifier`.
    pub fn new(source: S, notifier: N) -> Self {
        Self { source, notifier }
    }

    /// Build a new snapshot from one lookup per slot.
    ///
    /// Missing records are not errors.
    ///
    /// # Errors
    ///
    /// Returns [`CoolingError::Storage`] when the source itself fails; the
    /// sweep stops at that slot.
    #[tracing::instrument(skip(self))]
    pub async fn refresh_status(&self) -> Result<CoolingProcessStatus, CoolingError> {
        tracing::debug!("status refresh started");
        notify(&self.notifier, NotificationKind::StatusRefreshStarted).await;

        let mut snapshot = CoolingProcessStatus::new();
        let mut misses = 0_usize;
        for group in EquipmentGroup::ALL {
            misses += self.sweep(group, &mut snapshot).await?;
        }

        let enabled_top_banks = snapshot.enabled_count(EquipmentGroup::TopBank);
        let enabled_bottom_banks = snapshot.enabled_count(EquipmentGroup::BottomBank);
        tracing::debug!(
            misses,
            elapsed_ms = elapsed_ms(snapshot.refreshed_at()),
            enabled_top_banks,
            enabled_bottom_banks,
            "status refresh completed"
        );
        notify(
            &self.notifier,
            NotificationKind::StatusRefreshCompleted {
                enabled_top_banks,
                enabled_bottom_banks,
            },
        )
        .await;

        Ok(snapshot)
    }

    /// Fill the slots of `group`; returns how many lookups found nothing.
    async fn sweep(
        &self,
        group: EquipmentGroup,
        snapshot: &mut CoolingProcessStatus,
    ) -> Result<usize, CoolingError> {
        let position = group.position();
        let device_type = group.device_type();
        let mut misses = 0;

        for (index, seq) in group.sequence_numbers().enumerate() {
            let found = self
                .source
                .load_equipment_status(seq, position, device_type)
                .await
                .inspect_err(|err| {
                    tracing::error!(
                        error = %err,
                        %group,
                        sequence_no = seq,
                        "equipment status lookup failed"
                    );
                })?;

            match found {
                Some(record) => {
                    let placed = snapshot.set(group, index, record.status());
                    debug_assert!(placed, "{group} slot {index} outside capacity");
                }
                None => {
                    tracing::trace!(%group, sequence_no = seq, "equipment status missing");
                    misses += 1;
                }
            }
        }
        Ok(misses)
    }
}
