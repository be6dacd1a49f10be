//! # Netkit Common
//!
//! Pure domain types shared by every netkit crate. Nothing in here performs I/O.
//!
//! * **[`network`]**: address parsing, classification and the geolocation record.
//! * **[`config`]**: runtime settings built by the entry point.
//! * **[`error`]**: errors raised by the domain layer.

pub mod config;
pub mod error;
pub mod network;
