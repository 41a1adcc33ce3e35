//! # rotcool-adapter-storage-sqlite-sqlx
//!
//! `SQLite` adapter for the plant database using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement `ZoneConfigSource` and `EquipmentStatusSource` from `rotcool-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Translate boundary encodings: `±10` vertical positions, `1/2/3` device
//!   types, non-zero enablement columns, blank-padded strings
//!
//! ## Dependency rule
//! Depends on `rotcool-app` (for port traits) and `rotcool-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;

mod equipment_status_repo;
mod zone_config_repo;

pub use equipment_status_repo::SqliteEquipmentStatusRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use zone_config_repo::SqliteZoneConfigRepository;
