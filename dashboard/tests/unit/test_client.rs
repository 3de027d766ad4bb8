//! Backend client tests

use std::time::Duration;

use secrecy::SecretString;
use serde_json::{json, Value};

use slotwatch::errors::DashboardError;
use slotwatch::http::client::{ClientOptions, HttpClient};
use slotwatch::utils::diagnose;

use crate::mock_backend::MockBackend;

#[tokio::test]
async fn test_get_json_reports_status_and_body() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let err = client.get_json::<Value>("/api/boom").await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("GET"));
    assert!(message.contains("/api/boom"));
    assert!(message.contains("HTTP 500"));
    assert!(message.contains("boom"));
    assert_eq!(err.summary(), "HTTP 500");
}

#[tokio::test]
async fn test_get_json_previews_malformed_body() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    match client.get_json::<Value>("/api/not-json").await {
        Err(DashboardError::MalformedResponse { preview, .. }) => assert_eq!(preview, "not-json"),
        other => panic!("expected a malformed response, got {other:?}"),
    }
}

#[tokio::test]
async fn test_post_with_empty_body_resolves_to_empty_object() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let ack = client.open_gate(None).await.unwrap();
    assert_eq!(ack, json!({}));
}

#[tokio::test]
async fn test_typed_reads() {
    let backend = MockBackend::start().await;
    let client = backend.client();

    let devices = client.list_devices().await.unwrap();
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0].device_id.as_deref(), Some("gate-<1>"));

    let view = client.get_slots().await.unwrap();
    assert_eq!(view.booking_ttl_min, Some(15));
    assert!(!view.is_admin());
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    // nothing listens on the discard port
    let options = ClientOptions {
        base_url: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    };
    let client = HttpClient::new(&options).unwrap();

    let err = client.list_devices().await.unwrap_err();
    assert!(matches!(err, DashboardError::NetworkError(_)));
}

#[tokio::test]
async fn test_diagnostic_checks() {
    let backend = MockBackend::start().await;
    let results = diagnose(&backend.client()).await;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.ok));
    assert_eq!(results[0].detail, "1.2.3");
    assert_eq!(results[1].detail, "ok");
}

fn session_client(backend: &MockBackend) -> HttpClient {
    let options = ClientOptions {
        base_url: backend.base_url.clone(),
        session_cookie: Some(SecretString::from("abc123".to_string())),
        timeout: Duration::from_secs(5),
        ..Default::default()
    };
    HttpClient::new(&options).unwrap()
}

fn assert_session_headers(echo: &Value) {
    assert_eq!(echo["cookie"], "session=abc123");
    assert!(echo["cacheControl"].as_str().unwrap().contains("no-cache"));
    assert_eq!(echo["pragma"], "no-cache");
}

#[tokio::test]
async fn test_get_sends_session_cookie_and_no_cache() {
    let backend = MockBackend::start().await;
    let client = session_client(&backend);

    let echo: Value = client.get_json("/api/echo-headers").await.unwrap();
    assert_session_headers(&echo);
}

#[tokio::test]
async fn test_post_sends_session_cookie_and_no_cache() {
    let backend = MockBackend::start().await;
    let client = session_client(&backend);

    let echo = client
        .post_json("/api/echo-headers", &json!({"slotId": 3}))
        .await
        .unwrap();
    assert_session_headers(&echo);
}

#[tokio::test]
async fn test_no_cookie_without_session() {
    let backend = MockBackend::start().await;

    let echo: Value = backend.client().get_json("/api/echo-headers").await.unwrap();
    assert!(echo["cookie"].is_null());
    assert_eq!(echo["pragma"], "no-cache");
}
