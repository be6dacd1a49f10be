//! # Address Model
//!
//! Everything netkit knows about a single IP address.
//!
//! * [`address::ParsedAddress`]: the validated input, kept alongside its raw text.
//! * [`classification::Classification`]: version, IPv4 class and scope, derived without I/O.
//! * [`geo::GeoInfo`]: the optional enrichment returned by a geolocation service.
//! * [`report::Report`]: the three of the above bundled for printing.

pub mod address;
pub mod classification;
pub mod geo;
pub mod report;
