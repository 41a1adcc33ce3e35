//! Zone assembler: builds the cooling process once at startup.
//!
//! Zones `1..=expected` are loaded one at a time, in order. The first
//! missing zone or unknown zone-type code aborts the whole assembly: no
//! partial process is ever returned. Only zone scalars are populated; the
//! unit/bank/device hierarchy is left empty.

use rotcool_domain::error::{CoolingError, ValidationError};
use rotcool_domain::notification::NotificationKind;
use rotcool_domain::process::CoolingProcess;
use rotcool_domain::zone::{CoolingZone, ZoneType};

use crate::ports::{NotificationSink, ZoneConfigSource};
use crate::services::notify;

/// Application service assembling a [`CoolingProcess`] from zone configuration.
pub struct ZoneAssembler<Z, N> {
    source: Z,
    notifier: N,
}

impl<Z, N> ZoneAssembler<Z, N>
where
    Z: ZoneConfigSource + Sync,
    N: NotificationSink + Sync,
{
    /// Create a new assembler reading from `source` and reporting to `notifier`.
    pub fn new(source: Z, notifier: N) -> Self {
        Self { source, notifier }
    }

    /// Load zones `1..=expected_zone_count` and place each into the slot of
    /// its zone type. A repeated zone type overwrites the earlier zone.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidZoneCount`] when `expected_zone_count` is 0
    /// - [`CoolingError::ZoneLoadFailure`] for the first zone number without a record
    /// - [`CoolingError::UnknownZoneType`] for the first record whose type is not 1, 2 or 3
    /// - [`CoolingError::Storage`] when the source itself fails
    #[tracing::instrument(skip(self))]
    pub async fn assemble_process(
        &self,
        expected_zone_count: u32,
    ) -> Result<CoolingProcess, CoolingError> {
        if expected_zone_count == 0 {
            let err = CoolingError::from(ValidationError::InvalidZoneCount(0));
            return Err(self.fail(err).await);
        }

        tracing::info!(expected = expected_zone_count, "zone assembly started");
        notify(
            &self.notifier,
            NotificationKind::AssemblyStarted {
                expected: expected_zone_count,
            },
        )
        .await;

        let mut process = CoolingProcess::default();
        for zone_no in 1..=expected_zone_count {
            let zone = match self.load_zone(zone_no).await {
                Ok(zone) => zone,
                Err(err) => return Err(self.fail(err).await),
            };
            let zone_type = zone.zone_type();

            tracing::debug!(
                zone_no,
                %zone_type,
                zone_id = %zone.spec().zone_id,
                num_units = zone.spec().num_units,
                "zone classified"
            );
            if let Some(previous) = process.place(zone) {
                tracing::warn!(
                    zone_no,
                    %zone_type,
                    replaced_zone_no = previous.spec().zone_no,
                    "zone type repeated, previous zone replaced"
                );
            }
            notify(
                &self.notifier,
                NotificationKind::ZoneClassified { zone_no, zone_type },
            )
            .await;
        }

        tracing::info!(zones = process.zone_num(), "zone assembly completed");
        notify(
            &self.notifier,
            NotificationKind::AssemblyCompleted {
                zones: process.zone_num(),
            },
        )
        .await;

        Ok(process)
    }

    async fn load_zone(&self, zone_no: u32) -> Result<CoolingZone, CoolingError> {
        let record = self
            .source
            .load_zone_config(zone_no)
            .await?
            .ok_or(CoolingError::ZoneLoadFailure { zone_no })?;
        let zone_type = ZoneType::try_from(record.zone_type)?;
        Ok(CoolingZone::from_spec(zone_type, record.into_spec()))
    }

    async fn fail(&self, err: CoolingError) -> CoolingError {
        tracing::error!(error = %err, "zone assembly failed");
        notify(
            &self.notifier,
            NotificationKind::AssemblyFailed {
                reason: err.to_string(),
            },
        )
        .await;
        err
    }
}
