//! # Netkit Core
//!
//! Runs the inspection of a single address: parse, classify, then enrich public
//! addresses through a [`geolocation::GeoLocator`].

pub mod geolocation;
pub mod inspector;
