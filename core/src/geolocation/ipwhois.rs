//! Client for the free `ipwho.is` geolocation API.
//!
//! One `GET <endpoint>/<ip>` per lookup. The response looks like:
//!
//! ```json
//! {
//!   "ip": "8.8.8.8",
//!   "success": true,
//!   "continent": "North America",
//!   "country": "United States",
//!   "region": "California",
//!   "connection": { "org": "Google LLC", "isp": "Google LLC" }
//! }
//! ```
//!
//! Unknown fields are ignored; missing or `null` text fields read as empty.

use async_trait::async_trait;
use netkit_common::config::Config;
use netkit_common::network::geo::GeoInfo;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::{GeoLocator, GeoLookupError};

#[derive(Debug, Clone)]
pub struct IpWhoIsClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IpWhoIsResponse {
    #[serde(deserialize_with = "null_as_empty")]
    ip: String,
    success: Option<bool>,
    message: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    continent: String,
    #[serde(deserialize_with = "null_as_empty")]
    country: String,
    #[serde(deserialize_with = "null_as_empty")]
    region: String,
    connection: Option<Connection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Connection {
    #[serde(deserialize_with = "null_as_empty")]
    org: String,
    #[serde(deserialize_with = "null_as_empty")]
    isp: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl IpWhoIsResponse {
    fn into_geo_info(self, queried: &str) -> Result<GeoInfo, GeoLookupError> {
        if self.success == Some(false) {
            return Err(GeoLookupError::Rejected {
                ip: queried.to_string(),
                message: self.message.unwrap_or_else(|| "unknown reason".to_string()),
            });
        }

        if self.ip.is_empty() {
            return Err(GeoLookupError::NoData {
                ip: queried.to_string(),
            });
        }

        let connection = self.connection.unwrap_or_default();
        Ok(GeoInfo {
            ip: self.ip,
            continent: self.continent,
            country: self.country,
            region: self.region,
            org: connection.org,
            isp: connection.isp,
        })
    }
}

impl IpWhoIsClient {
    pub fn new(cfg: &Config) -> Result<Self, GeoLookupError> {
        let mut builder = Client::builder()
            .user_agent(concat!("netkit/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = cfg.lookup_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: cfg.geo_endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, ip: &str) -> String {
        format!("{}/{}", self.endpoint, ip)
    }
}

#[async_trait]
impl GeoLocator for IpWhoIsClient {
    async fn locate(&self, ip: &str) -> Result<GeoInfo, GeoLookupError> {
        let url = self.url_for(ip);
        debug!("GET {url}");

        let response = self.client.get(&url).send().await?.error_for_status()?;

        // The body is drained before decoding so the connection goes back to the
        // pool even when the payload is garbage.
        let body = response.bytes().await?;
        let decoded: IpWhoIsResponse = serde_json::from_slice(&body)?;

        decoded.into_geo_info(ip)
    }
}
