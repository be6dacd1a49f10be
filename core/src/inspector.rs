use netkit_common::error::AddressError;
use netkit_common::network::address::ParsedAddress;
use netkit_common::network::report::Report;
use tracing::debug;

use crate::geolocation::GeoLocator;

/// Parses, classifies and, for public addresses, geolocates a single input.
pub struct InspectService {
    geo_locator: Box<dyn GeoLocator>,
}

impl InspectService {
    pub fn new(geo_locator: Box<dyn GeoLocator>) -> Self {
        Self { geo_locator }
    }

    /// Fails only when `input` is not an IP address.
    ///
    /// Geolocation is best-effort: any lookup failure yields a report without geo data.
    pub async fn inspect(&self, input: &str) -> Result<Report, AddressError> {
        let address: ParsedAddress = input.parse()?;
        let report = Report::from(address);

        if !report.wants_geo() {
            debug!("{} is private, skipping geolocation", report.address);
            return Ok(report);
        }

        let geo = match self.geo_locator.locate(report.address.raw()).await {
            Ok(geo) => Some(geo),
            Err(e) => {
                debug!("Geolocation for {} skipped: {e}", report.address);
                None
            }
        };

        Ok(report.with_geo(geo))
    }
}
