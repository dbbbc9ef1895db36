//! Adapter tests against mocked provider APIs (wiremock-based)

use application::{
    error::ApplicationError,
    ports::{GeocodingPort, TransitPort},
};
use domain::value_objects::GeoLocation;
use infrastructure::{GoogleGeocodingAdapter, SpTransTransitAdapter};
use integration_googlemaps::GoogleMapsConfig;
use integration_sptrans::SpTransConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAULISTA: &str = "Avenida Paulista, 1578, São Paulo";

fn paulista_body() -> serde_json::Value {
    serde_json::json!({
        "status": "OK",
        "results": [{
            "formatted_address": "Av. Paulista, 1578 - Bela Vista, São Paulo - SP, 01310-200, Brazil",
            "geometry": {"location": {"lat": -23.5613, "lng": -46.6569}},
            "place_id": "ChIJAVkDPzdZzpQRMALrSbUJGVM",
            "types": ["street_address"]
        }]
    })
}

#[tokio::test]
async fn geocode_adapter_echoes_address() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", PAULISTA))
        .respond_with(ResponseTemplate::new(200).set_body_json(paulista_body()))
        .expect(1)
        .mount(&server)
        .await;

    let adapter =
        GoogleGeocodingAdapter::from_config(&GoogleMapsConfig::for_testing(server.uri()), "key")
            .unwrap();

    let results = adapter.geocode_address(PAULISTA).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].original_address, PAULISTA);
    assert!((results[0].latitude + 23.5613).abs() < 1e-9);
    assert!((results[0].longitude + 46.6569).abs() < 1e-9);
    assert!(!results[0].partial_match);
}

#[tokio::test]
async fn geocode_adapter_zero_results_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&server)
        .await;

    let adapter =
        GoogleGeocodingAdapter::from_config(&GoogleMapsConfig::for_testing(server.uri()), "key")
            .unwrap();

    let err = adapter.geocode_address("nowhere at all").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn reverse_adapter_echoes_coordinates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("latlng", "-23.5613,-46.6569"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paulista_body()))
        .mount(&server)
        .await;

    let adapter =
        GoogleGeocodingAdapter::from_config(&GoogleMapsConfig::for_testing(server.uri()), "key")
            .unwrap();

    let location = GeoLocation::new(-23.5613, -46.6569).unwrap();
    let results = adapter.reverse_geocode(location).await.unwrap();

    assert_eq!(results.len(), 1);
    assert!((results[0].original_latitude + 23.5613).abs() < f64::EPSILON);
    assert!((results[0].original_longitude + 46.6569).abs() < f64::EPSILON);
}

#[tokio::test]
async fn transit_adapter_failed_login_is_unavailable_without_search() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Login/Autenticar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Linha/Buscar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(0)
        .mount(&server)
        .await;

    let adapter =
        SpTransTransitAdapter::from_config(&SpTransConfig::for_testing(server.uri()), "key")
            .unwrap();

    let err = adapter.search_lines("8000").await.unwrap_err();
    assert!(matches!(err, ApplicationError::ServiceUnavailable(_)));
    assert!(!adapter.is_authenticated().await);
}

#[tokio::test]
async fn transit_adapter_maps_lines() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/Login/Autenticar"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "apiCredentials=xyz; path=/")
                .set_body_string("true"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/Linha/Buscar"))
        .and(query_param("termosBusca", "8000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"cl": 1273, "lc": false, "lt": "8000", "sl": 1, "tl": 10,
             "tp": "PCA. RAMOS DE AZEVEDO", "ts": "TERMINAL LAPA"}
        ])))
        .mount(&server)
        .await;

    let adapter =
        SpTransTransitAdapter::from_config(&SpTransConfig::for_testing(server.uri()), "key")
            .unwrap();

    let lines = adapter.search_lines("8000").await.unwrap();

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].code, 1273);
    assert_eq!(lines[0].sign, "8000");
    assert_eq!(lines[0].secondary_terminal, "TERMINAL LAPA");
    assert!(adapter.is_authenticated().await);
}
