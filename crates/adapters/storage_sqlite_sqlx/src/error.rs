//! Failures of the plant database, surfaced to services as
//! [`CoolingError::Storage`].

use rotcool_domain::error::CoolingError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The configured URL is not a usable `SQLite` location.
    #[error("invalid database url {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    /// Opening a connection or running a lookup failed.
    #[error("sqlite query failed")]
    Query(#[from] sqlx::Error),

    /// The cooling schema could not be brought up to date.
    #[error("schema migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for CoolingError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
