//! # rotcool-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ZoneConfigSource`: one configuration record per zone number
//!   - `EquipmentStatusSource`: one enablement record per
//!     (sequence number, vertical position, device type)
//!   - `NotificationSink`: fire-and-forget operational notifications
//! - Define the use-cases as service structs:
//!   - `ZoneAssembler`: builds the `CoolingProcess` once at startup (fail-fast)
//!   - `StatusAggregator`: sweeps all status slots into a fresh snapshot (fail-soft)
//!   - `StatusPublisher` / `StatusPoller`: periodic refresh published by
//!     reference swap
//! - Provide **in-process infrastructure** (notification bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `rotcool-domain` only (plus `tokio` for channels, timers and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod notification_bus;
pub mod ports;
pub mod services;
