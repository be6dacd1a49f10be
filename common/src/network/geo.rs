/// Geolocation details for a public address, copied verbatim from the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoInfo {
    pub ip: String,
    pub continent: String,
    pub country: String,
    pub region: String,
    pub org: String,
    pub isp: String,
}
