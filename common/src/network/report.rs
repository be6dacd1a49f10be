use super::address::ParsedAddress;
use super::classification::{self, Classification, Scope};
use super::geo::GeoInfo;

/// Everything printed for one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub address: ParsedAddress,
    pub classification: Classification,
    geo: Option<GeoInfo>,
}

impl From<ParsedAddress> for Report {
    fn from(address: ParsedAddress) -> Self {
        let classification = classification::classify(&address);
        Self {
            address,
            classification,
            geo: None,
        }
    }
}

impl Report {
    /// Only public addresses are worth a geolocation lookup.
    pub fn wants_geo(&self) -> bool {
        self.classification.scope == Scope::Public
    }

    /// Attaches geolocation data. Ignored for private addresses.
    pub fn with_geo(mut self, geo: Option<GeoInfo>) -> Self {
        if self.wants_geo() {
            self.geo = geo;
        }
        self
    }

    pub fn geo(&self) -> Option<&GeoInfo> {
        self.geo.as_ref()
    }
}
