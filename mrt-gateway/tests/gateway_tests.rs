//! End-to-end tests: axum router in front of a WireMock upstream.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mrt_gateway::upstream::{UpstreamClient, UpstreamConfig};
use mrt_gateway::web::{AppState, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const FEED_PATH: &str = "/id/val/stasiuns";

/// Upstream sample. Station "4" only lists 00:00, which is never strictly
/// in the future, so its result does not depend on the wall clock.
fn sample_feed() -> Value {
    json!([
        {
            "nid": "1",
            "title": "Stasiun Lebak Bulus Grab",
            "jadwal_lb_biasa": "",
            "jadwal_hi_biasa": "05:00, 05:10"
        },
        {
            "nid": "2",
            "title": "Stasiun Fatmawati Indomaret",
            "jadwal_lb_biasa": "05:30",
            "jadwal_hi_biasa": "05:02,05:12"
        },
        {
            "nid": "3",
            "title": "Stasiun Cipete Raya",
            "jadwal_lb_biasa": "05:00,5:15",
            "jadwal_hi_biasa": ""
        },
        {
            "nid": "4",
            "title": "Stasiun Haji Nawi",
            "jadwal_lb_biasa": "00:00",
            "jadwal_hi_biasa": "00:00,"
        }
    ])
}

async fn gateway_with(response: ResponseTemplate) -> (Router, MockServer) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(response)
        .mount(&server)
        .await;

    let config = UpstreamConfig::new(format!("{}{FEED_PATH}", server.uri())).with_timeout(2);
    let upstream = UpstreamClient::new(config).expect("client");
    (create_router(AppState::new(upstream)), server)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn list_stations() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let (status, body) = get(app, "/v1/api/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully get all station");
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(
        body["data"][1],
        json!({ "id": "2", "name": "Stasiun Fatmawati Indomaret" })
    );
}

#[tokio::test]
async fn list_stations_empty_upstream() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200).set_body_json(json!([]))).await;

    let (status, body) = get(app, "/v1/api/stations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn schedules_for_known_station() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let (status, body) = get(app, "/v1/api/stations/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Successfully get schedule by station");
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn schedules_entries_have_label_and_time() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let (status, body) = get(app, "/v1/api/stations/2").await;
    assert_eq!(status, StatusCode::OK);
    for entry in body["data"].as_array().unwrap() {
        let label = entry["station"].as_str().unwrap();
        assert!(
            label == "Stasiun Lebak Bulus Grab" || label == "Stasiun Bundaran HI Bank DKI",
            "unexpected label {label}"
        );
        assert_eq!(entry["time"].as_str().unwrap().len(), 5);
    }
}

#[tokio::test]
async fn unknown_station_is_bad_request() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let (status, body) = get(app, "/v1/api/stations/UNKNOWN_ID").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["data"], Value::Null);
    let message = body["message"].as_str().unwrap().to_lowercase();
    assert!(message.contains("not found"), "message was {message}");
}

#[tokio::test]
async fn malformed_timetable_is_bad_request() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200).set_body_json(sample_feed())).await;

    let (status, body) = get(app, "/v1/api/stations/3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "invalid time format: 5:15");
}

#[tokio::test]
async fn upstream_failure_is_bad_request() {
    let (app, _server) = gateway_with(ResponseTemplate::new(500)).await;

    let (status, body) = get(app, "/v1/api/stations").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "unexpected status code: 500 Internal Server Error"
    );
}

#[tokio::test]
async fn malformed_upstream_is_bad_request() {
    let (app, _server) =
        gateway_with(ResponseTemplate::new(200).set_body_string("<html></html>")).await;

    let (status, body) = get(app, "/v1/api/stations/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("invalid upstream payload")
    );
}

#[tokio::test]
async fn health() {
    let (app, _server) = gateway_with(ResponseTemplate::new(200)).await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
