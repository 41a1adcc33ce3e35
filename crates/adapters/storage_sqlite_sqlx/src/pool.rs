//! Connection pool for the plant database and its embedded schema.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Where the plant database lives.
pub struct Config {
    /// `SQLite` URL, e.g. `sqlite:rotcool.db?mode=rwc` or `sqlite::memory:`.
    pub database_url: String,
}

impl Config {
    /// Open the database (creating the file when missing) and apply the
    /// cooling schema migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidUrl`] for an unparsable URL, otherwise
    /// the connection or migration failure.
    pub async fn build(self) -> Result<Database, StorageError> {
        let options = SqliteConnectOptions::from_str(&self.database_url)
            .map_err(|source| StorageError::InvalidUrl {
                url: self.database_url.clone(),
                source,
            })?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(url = %self.database_url, "plant database ready");

        Ok(Database { pool })
    }
}

/// Open plant database. Repositories take a clone of [`Database::pool`].
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Wait for in-flight lookups to finish and close every connection.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("plant database closed");
    }
}
