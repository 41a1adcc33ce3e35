//! `SQLite` implementation of [`ZoneConfigSource`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rotcool_app::ports::{ZoneConfigSource, ZoneRecord};
use rotcool_domain::error::CoolingError;

use crate::error::StorageError;

/// Wrapper for converting database rows into [`ZoneRecord`].
struct Wrapper(ZoneRecord);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<ZoneRecord> {
        value.map(|w| w.0)
    }
}

fn trimmed(row: &SqliteRow, column: &str) -> Result<String, sqlx::Error> {
    let value: String = row.try_get(column)?;
    Ok(value.trim().to_owned())
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(ZoneRecord {
            area_id: trimmed(row, "area_id")?,
            center_id: trimmed(row, "center_id")?,
            zone_no: row.try_get("zone_no")?,
            zone_id: trimmed(row, "zone_id")?,
            zone_seq: row.try_get("zone_seq")?,
            zone_type: row.try_get("zone_type")?,
            num_units: row.try_get("num_units")?,
            length: row.try_get("length")?,
            width: row.try_get("width")?,
            main_pressure: row.try_get("main_pres")?,
            water_temperature: row.try_get("water_temp")?,
        }))
    }
}

const SELECT_BY_ZONE_NO: &str = "SELECT area_id, center_id, zone_no, zone_id, zone_seq, zone_type, num_units, length, width, main_pres, water_temp \
     FROM tdb_cooling_zone_data \
     WHERE RTRIM(area_id) = ? AND RTRIM(center_id) = ? AND zone_no = ?";

/// `SQLite`-backed zone configuration, scoped to one area and center.
pub struct SqliteZoneConfigRepository {
    pool: SqlitePool,
    area_id: String,
    center_id: String,
}

impl SqliteZoneConfigRepository {
    /// Create a repository reading zones of `area_id` / `center_id`.
    #[must_use]
    pub fn new(pool: SqlitePool, area_id: impl Into<String>, center_id: impl Into<String>) -> Self {
        Self {
            pool,
            area_id: area_id.into(),
            center_id: center_id.into(),
        }
    }
}

impl ZoneConfigSource for SqliteZoneConfigRepository {
    fn load_zone_config(
        &self,
        zone_no: u32,
    ) -> impl Future<Output = Result<Option<ZoneRecord>, CoolingError>> + Send {
        let pool = self.pool.clone();
        let area_id = self.area_id.clone();
        let center_id = self.center_id.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ZONE_NO)
                .bind(&area_id)
                .bind(&center_id)
                .bind(zone_no)
                .fetch_optional(&pool)
                .await
                .map_err(|err| {
                    tracing::error!(
                        error = %err,
                        %area_id,
                        %center_id,
                        zone_no,
                        "failed to load zone configuration"
                    );
                    StorageError::from(err)
                })?;

            if row.is_none() {
                tracing::trace!(%area_id, %center_id, zone_no, "no zone configuration found");
            }
            Ok(Wrapper::maybe(row))
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

    async fn insert_zone(
        pool: &SqlitePool,
        area: &str,
        center: &str,
        zone_no: u32,
        zone_id: &str,
        zone_type: i32,
    ) {
        sqlx::query(
            "INSERT INTO tdb_cooling_zone_data (area_id, center_id, zone_no, zone_id, zone_seq, zone_type, num_units, length, width, main_pres, water_temp) \
             VALUES (?, ?, ?, ?, ?, ?, 6, 24000.0, 2100.0, 0.8, 24.5)",
        )
        .bind(area)
        .bind(center)
        .bind(zone_no)
        .bind(zone_id)
        .bind(zone_no)
        .bind(zone_type)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn should_load_zone_when_row_exists() {
        let pool = setup().await;
        insert_zone(&pool, "HSM", "DC", 2, "STANDARD", 2).await;
        let repo = SqliteZoneConfigRepository::new(pool, "HSM", "DC");

        let record = repo.load_zone_config(2).await.unwrap().unwrap();

        assert_eq!(record.zone_no, 2);
        assert_eq!(record.zone_seq, 2);
        assert_eq!(record.zone_type, 2);
        assert_eq!(record.num_units, 6);
        assert!((record.length - 24_000.0).abs() < f32::EPSILON);
        assert!((record.width - 2_100.0).abs() < f32::EPSILON);
        assert!((record.main_pressure - 0.8).abs() < f32::EPSILON);
        assert!((record.water_temperature - 24.5).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn should_return_none_when_zone_not_found() {
        let pool = setup().await;
        insert_zone(&pool, "HSM", "DC", 1, "INTENSIVE", 1).await;
        let repo = SqliteZoneConfigRepository::new(pool, "HSM", "DC");

        assert!(repo.load_zone_config(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_match_and_trim_blank_padded_columns() {
        let pool = setup().await;
        insert_zone(&pool, "HSM  ", "DC    ", 1, "INTENSIVE     ", 1).await;
        let repo = SqliteZoneConfigRepository::new(pool, "HSM", "DC");

        let record = repo.load_zone_config(1).await.unwrap().unwrap();

        assert_eq!(record.area_id, "HSM");
        assert_eq!(record.center_id, "DC");
        assert_eq!(record.zone_id, "INTENSIVE");
    }

    #[tokio::test]
    async fn should_ignore_zones_of_other_centers() {
        let pool = setup().await;
        insert_zone(&pool, "HSM", "RM", 1, "INTENSIVE", 1).await;
        let repo = SqliteZoneConfigRepository::new(pool, "HSM", "DC");

        assert!(repo.load_zone_config(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_raw_zone_type_without_validation() {
        let pool = setup().await;
        insert_zone(&pool, "HSM", "DC", 1, "BROKEN", 99).await;
        let repo = SqliteZoneConfigRepository::new(pool, "HSM", "DC");

        let record = repo.load_zone_config(1).await.unwrap().unwrap();

        assert_eq!(record.zone_type, 99);
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_table_missing() {
        let pool = setup().await;
        sqlx::query("DROP TABLE tdb_cooling_zone_data")
            .execute(&pool)
            .await
            .unwrap();
        let repo = SqliteZoneConfigRepository::new(pool, "HSM", "DC");

        let result = repo.load_zone_config(1).await;

        assert!(matches!(result, Err(CoolingError::Storage(_))));
    }
}
