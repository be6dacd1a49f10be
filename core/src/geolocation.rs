//! The **abstraction** for geolocation lookups.
//!
//! The inspection service depends on [`GeoLocator`] only. The concrete client for
//! `ipwho.is` lives in [`ipwhois`]; tests substitute in-memory locators.

use async_trait::async_trait;
use netkit_common::network::geo::GeoInfo;
use thiserror::Error;

pub mod ipwhois;

pub use ipwhois::IpWhoIsClient;

#[derive(Debug, Error)]
pub enum GeoLookupError {
    /// Connection, TLS, timeout or non-success HTTP status.
    #[error("geolocation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("geolocation response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered, but the `ip` field was empty.
    #[error("no data for IP {ip}")]
    NoData { ip: String },

    #[error("geolocation service rejected {ip}: {message}")]
    Rejected { ip: String, message: String },
}

/// Resolves a textual IP address to its geolocation.
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Performs exactly one lookup. No retries, no caching.
    async fn locate(&self, ip: &str) -> Result<GeoInfo, GeoLookupError>;
}
