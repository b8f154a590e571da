//! # Domain Models
//!
//! Pure data shared by every crate: the configuration tree, wire/storage constants and
//! the feature-slice registry. Only `serde`; no I/O and no business logic.

pub mod config;
pub mod constants;
pub mod registry;
