//! `SQLite` implementation of [`EquipmentStatusSource`].
//!
//! The enablement columns are named `*_out_of_order` in the plant database,
//! yet a non-zero value means the level is **enabled**.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rotcool_app::ports::{EquipmentStatusSource, StatusRecord};
use rotcool_domain::code::{DeviceType, VerticalPosition};
use rotcool_domain::error::CoolingError;

use crate::error::StorageError;

/// Wrapper for converting database rows into [`StatusRecord`].
struct Wrapper(StatusRecord);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let zone_id: String = row.try_get("zone_id")?;
        let bank_out_of_order: i64 = row.try_get("bank_out_of_order")?;
        let device_out_of_order: i64 = row.try_get("device_out_of_order")?;

        Ok(Self(StatusRecord {
            zone_no: row.try_get("zone_no")?,
            zone_id: zone_id.trim().to_owned(),
            bank_seq: row.try_get("bank_seq")?,
            l1_enabled: bank_out_of_order != 0,
            l2_enabled: device_out_of_order != 0,
            record_id: row.try_get("rtdb_acc_status_no")?,
        }))
    }
}

const SELECT_BY_KEY: &str = "SELECT zone_no, zone_id, bank_seq, bank_out_of_order, device_out_of_order, rtdb_acc_status_no \
     FROM rtdb_acc_status \
     WHERE bank_no = ? AND bank_pos = ? AND device_type = ?";

/// `SQLite`-backed real-time equipment status.
pub struct SqliteEquipmentStatusRepository {
    pool: SqlitePool,
}

impl SqliteEquipmentStatusRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EquipmentStatusSource for SqliteEquipmentStatusRepository {
    fn load_equipment_status(
        &self,
        sequence_no: u32,
        position: VerticalPosition,
        device_type: DeviceType,
    ) -> impl Future<Output = Result<Option<StatusRecord>, CoolingError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_KEY)
                .bind(sequence_no)
                .bind(position.code())
                .bind(device_type.code())
                .fetch_optional(&pool)
                .await
                .map_err(|err| {
                    tracing::error!(
                        error = %err,
                        sequence_no,
                        %position,
                        %device_type,
                        "failed to load equipment status"
                    );
                    StorageError::from(err)
                })?;

            Ok(row.map(|w| w.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqlitePool {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        db.pool().clone()
    }

    async fn insert_status(
        pool: &SqlitePool,
        bank_no: u32,
        bank_pos: i32,
        device_type: i32,
        bank_out_of_order: i64,
        device_out_of_order: i64,
    ) {
        sqlx::query(
            "INSERT INTO rtdb_acc_status (bank_no, bank_pos, device_type, zone_no, zone_id, bank_seq, bank_out_of_order, device_out_of_order, rtdb_acc_status_no) \
             VALUES (?, ?, ?, 1, 'INTENSIVE   ', 3, ?, ?, 4242)",
        )
        .bind(bank_no)
        .bind(bank_pos)
        .bind(device_type)
        .bind(bank_out_of_order)
        .bind(device_out_of_order)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_load_status_when_row_exists() {
        let pool = setup().await;
        insert_status(&pool, 1, 10, 3, 1, 0).await;
        let repo = SqliteEquipmentStatusRepository::new(pool);

        let record = repo
            .load_equipment_status(1, VerticalPosition::Top, DeviceType::Bank)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(record.zone_no, 1);
        assert_eq!(record.zone_id, "INTENSIVE");
        assert_eq!(record.bank_seq, 3);
        assert!(record.l1_enabled);
        assert!(!record.l2_enabled);
        assert_eq!(record.record_id, 4242);
    }

    #[tokio::test]
    async fn should_treat_any_nonzero_value_as_enabled() {
        let pool = setup().await;
        insert_status(&pool, 7, -10, 3, 5, -1).await;
        let repo = SqliteEquipmentStatusRepository::new(pool);

        let record = repo
            .load_equipment_status(7, VerticalPosition::Bottom, DeviceType::Bank)
            .await
            .unwrap()
            .unwrap();

        assert!(record.l1_enabled);
        assert!(record.l2_enabled);
    }

    #[tokio::test]
    async fn should_match_bottom_position_by_minus_ten() {
        let pool = setup().await;
        insert_status(&pool, 2, -10, 1, 1, 1).await;
        let repo = SqliteEquipmentStatusRepository::new(pool);

        let bottom = repo
            .load_equipment_status(2, VerticalPosition::Bottom, DeviceType::Device)
            .await
            .unwrap();
        let top = repo
            .load_equipment_status(2, VerticalPosition::Top, DeviceType::Device)
            .await
            .unwrap();

        assert!(bottom.is_some());
        assert!(top.is_none());
    }

    #[tokio::test]
    async fn should_distinguish_device_types_with_same_number() {
        let pool = setup().await;
        insert_status(&pool, 3, -10, 2, 1, 0).await;
        let repo = SqliteEquipmentStatusRepository::new(pool);

        let sidesweep = repo
            .load_equipment_status(3, VerticalPosition::Bottom, DeviceType::Sidesweep)
            .await
            .unwrap();
        let bank = repo
            .load_equipment_status(3, VerticalPosition::Bottom, DeviceType::Bank)
            .await
            .unwrap();

        assert!(sidesweep.is_some_and(|r| r.l1_enabled));
        assert!(bank.is_none());
    }

    #[tokio::test]
    async fn should_return_none_when_status_not_found() {
        let pool = setup().await;
        let repo = SqliteEquipmentStatusRepository::new(pool);

        let result = repo
            .load_equipment_status(68, VerticalPosition::Top, DeviceType::Bank)
            .await
            .unwrap();

        assert!(result.is_none());
    }
}
