use std::time::Duration;

pub const DEFAULT_GEO_ENDPOINT: &str = "https://ipwho.is";
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the geolocation service. The address is appended as a path segment.
    pub geo_endpoint: String,
    /// Upper bound for the whole lookup, from connect to the last body byte.
    ///
    /// `None` leaves the request unbounded.
    pub lookup_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            lookup_timeout: Some(DEFAULT_LOOKUP_TIMEOUT),
        }
    }
}
