#![cfg(test)]
use netkit_common::network::classification::Scope;
use netkit_common::network::geo::GeoInfo;
use netkit_core::geolocation::{GeoLocator, GeoLookupError, IpWhoIsClient};
use netkit_core::inspector::InspectService;

use crate::utils::{self, Reply};

const GOOGLE_DNS: &str = r#"{"ip":"8.8.8.8","continent":"North America","country":"United States","region":"California","connection":{"org":"Google LLC","isp":"Google LLC"}}"#;

fn google() -> GeoInfo {
    GeoInfo {
        ip: "8.8.8.8".to_string(),
        continent: "North America".to_string(),
        country: "United States".to_string(),
        region: "California".to_string(),
        org: "Google LLC".to_string(),
        isp: "Google LLC".to_string(),
    }
}

async fn locate_with(reply: Reply, ip: &str) -> Result<GeoInfo, GeoLookupError> {
    let (endpoint, _request) = utils::serve_once(reply).await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();
    client.locate(ip).await
}

#[tokio::test]
async fn lookup_decodes_successful_response() {
    let (endpoint, request) = utils::serve_once(utils::ok_json(GOOGLE_DNS)).await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();

    let geo = client.locate("8.8.8.8").await.unwrap();

    assert_eq!(geo, google());
    assert_eq!(request.await.unwrap(), "GET /8.8.8.8 HTTP/1.1");
}

#[tokio::test]
async fn ipv6_address_is_embedded_in_path() {
    let body = r#"{"ip":"2001:4860:4860::8888","country":"United States"}"#;
    let (endpoint, request) = utils::serve_once(utils::ok_json(body)).await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();

    let geo = client.locate("2001:4860:4860::8888").await.unwrap();

    assert_eq!(geo.country, "United States");
    assert_eq!(request.await.unwrap(), "GET /2001:4860:4860::8888 HTTP/1.1");
}

#[tokio::test]
async fn non_success_status_is_transport_failure() {
    let reply = Reply::Http {
        status: "503 Service Unavailable",
        body: GOOGLE_DNS.to_string(),
    };

    let err = locate_with(reply, "8.8.8.8").await.unwrap_err();
    assert!(matches!(err, GeoLookupError::Transport(ref e) if e.is_status()), "{err}");
}

#[tokio::test]
async fn malformed_body_is_decode_failure() {
    let err = locate_with(utils::ok_json("<html>rate limited</html>"), "8.8.8.8")
        .await
        .unwrap_err();
    assert!(matches!(err, GeoLookupError::Decode(_)), "{err}");
}

#[tokio::test]
async fn empty_ip_is_no_data() {
    let err = locate_with(utils::ok_json(r#"{"ip":"","country":"Nowhere"}"#), "8.8.8.8")
        .await
        .unwrap_err();
    assert!(matches!(err, GeoLookupError::NoData { .. }), "{err}");
}

#[tokio::test]
async fn success_false_is_rejected() {
    let body = r#"{"ip":"0.0.0.0","success":false,"message":"Reserved range"}"#;
    let err = locate_with(utils::ok_json(body), "0.0.0.0").await.unwrap_err();
    assert!(matches!(err, GeoLookupError::Rejected { .. }), "{err}");
}

#[tokio::test]
async fn hangup_is_transport_failure() {
    let err = locate_with(Reply::Hangup, "8.8.8.8").await.unwrap_err();
    assert!(matches!(err, GeoLookupError::Transport(_)), "{err}");
}

#[tokio::test]
async fn stalled_server_hits_timeout() {
    let err = locate_with(Reply::Stall, "8.8.8.8").await.unwrap_err();
    assert!(matches!(err, GeoLookupError::Transport(ref e) if e.is_timeout()), "{err}");
}

#[tokio::test]
async fn refused_connection_is_transport_failure() {
    let endpoint = utils::refused_endpoint().await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();

    let err = client.locate("8.8.8.8").await.unwrap_err();
    assert!(matches!(err, GeoLookupError::Transport(_)), "{err}");
}

#[tokio::test]
async fn service_enriches_public_address() {
    let (endpoint, _request) = utils::serve_once(utils::ok_json(GOOGLE_DNS)).await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();
    let service = InspectService::new(Box::new(client));

    let report = service.inspect("8.8.8.8").await.unwrap();

    assert_eq!(report.classification.scope, Scope::Public);
    assert_eq!(report.geo(), Some(&google()));
}

#[tokio::test]
async fn service_survives_broken_service() {
    let (endpoint, _request) = utils::serve_once(utils::ok_json("not json")).await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();
    let service = InspectService::new(Box::new(client));

    let report = service.inspect("8.8.8.8").await.unwrap();

    assert_eq!(report.classification.scope, Scope::Public);
    assert!(report.geo().is_none());
}

#[tokio::test]
async fn service_never_contacts_server_for_private_address() {
    let (endpoint, mut request) = utils::serve_once(utils::ok_json(GOOGLE_DNS)).await.unwrap();
    let client = IpWhoIsClient::new(&utils::config_for(&endpoint)).unwrap();
    let service = InspectService::new(Box::new(client));

    let report = service.inspect("192.168.1.1").await.unwrap();

    assert_eq!(report.classification.scope, Scope::Private);
    assert!(report.geo().is_none());
    assert!(request.try_recv().is_err());
}
