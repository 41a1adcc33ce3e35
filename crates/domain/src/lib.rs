//! # rotcool-domain
//!
//! Pure domain model for the run-out table cooling plant of a hot strip mill.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, boundary codes
//! - Define the physical hierarchy: **zones** own **units**, units own
//!   top/bottom **banks**, intensive banks own top/bottom **devices**
//! - Define the **process** aggregate (at most one zone per zone type)
//! - Define the real-time **equipment status snapshot** (five fixed-size
//!   slot collections, disabled by default)
//! - Describe a concrete **plant layout** (bank ranges per zone type)
//! - Define operational **notifications** emitted by the application layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod bank;
pub mod builder;
pub mod code;
pub mod device;
pub mod layout;
pub mod notification;
pub mod process;
pub mod status;
pub mod unit;
pub mod zone;
