//! # rotcool-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **read-only JSON API** over the assembled cooling process and
//!   the latest published equipment-status snapshot (`/api/process`,
//!   `/api/status`, …)
//! - Stream operational notifications as Server-Sent Events
//! - Map domain errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `rotcool-app` (for the publisher and notification bus) and
//! `rotcool-domain` (for types used in response mapping). Never leaks axum
//! types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
