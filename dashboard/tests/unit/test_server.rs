//! Dashboard route tests

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use slotwatch::app::options::AppOptions;
use slotwatch::app::state::AppState;
use slotwatch::refresh::refresher::ViewMode;
use slotwatch::server::serve::router;
use slotwatch::server::state::ServerState;

use crate::mock_backend::MockBackend;

fn dashboard(backend: &MockBackend, mode: ViewMode) -> (Router, AppState) {
    let options = AppOptions {
        view_mode: mode,
        ..Default::default()
    };
    let state = AppState::with_client(backend.client(), &options);
    let server_state = ServerState::new(
        state.panels.clone(),
        state.notices.clone(),
        state.dispatcher.clone(),
        mode,
        Duration::from_secs(2),
    );
    (router(Arc::new(server_state)), state)
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    post_form_with(uri, form, &[])
}

fn post_form_with(uri: &str, form: &str, headers: &[(&str, &str)]) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

#[tokio::test]
async fn test_health() {
    let backend = MockBackend::start().await;
    let (app, _) = dashboard(&backend, ViewMode::Both);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let payload: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(payload["status"], "healthy");
    assert_eq!(payload["service"], "slotwatch");
}

#[tokio::test]
async fn test_device_page_shows_refreshed_panel() {
    let backend = MockBackend::start().await;
    let (app, state) = dashboard(&backend, ViewMode::Device);
    state.refresher.refresh_now().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"<meta http-equiv="refresh" content="2">"#));
    assert!(html.contains(r#"id="devices""#));
    assert!(html.contains("gate-&lt;1&gt;"));
}

#[tokio::test]
async fn test_device_page_redirects_in_booking_mode() {
    let backend = MockBackend::start().await;
    let (app, _) = dashboard(&backend, ViewMode::Booking);

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/bookings");
}

#[tokio::test]
async fn test_panel_fragment() {
    let backend = MockBackend::start().await;
    let (app, _) = dashboard(&backend, ViewMode::Both);

    let response = app.clone().oneshot(get("/panels/my-bookings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Waiting for first refresh..."));

    let response = app.oneshot(get("/panels/weather")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_action_post_dispatches_and_redirects() {
    let backend = MockBackend::start().await;
    let (app, _) = dashboard(&backend, ViewMode::Booking);

    let response = app
        .clone()
        .oneshot(post_form(
            "/actions/request-booking",
            "slotId=3&returnTo=%2Fbookings",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/bookings");

    let html = body_text(app.oneshot(get("/bookings")).await.unwrap()).await;
    assert!(html.contains("<td>Slot 3</td>"));
    assert!(html.contains(r#"class="notice notice-info" role="status">Request booking succeeded"#));
    assert!(!html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn test_action_post_from_foreign_origin_is_forbidden() {
    let backend = MockBackend::start().await;
    let (app, state) = dashboard(&backend, ViewMode::Booking);

    let response = app
        .clone()
        .oneshot(post_form_with(
            "/actions/request-booking",
            "slotId=3&returnTo=%2Fbookings",
            &[
                ("host", "127.0.0.1:8080"),
                ("origin", "https://evil.example"),
                ("sec-fetch-site", "cross-site"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(post_form_with(
            "/actions/request-booking",
            "slotId=3",
            &[("sec-fetch-site", "cross-site")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // nothing reached the backend
    assert!(backend.state.bookings.lock().unwrap().is_empty());
    assert!(state.notices.is_empty());
}

#[tokio::test]
async fn test_action_post_from_same_origin_is_accepted() {
    let backend = MockBackend::start().await;
    let (app, _) = dashboard(&backend, ViewMode::Booking);

    let response = app
        .oneshot(post_form_with(
            "/actions/request-booking",
            "slotId=3&returnTo=%2Fbookings",
            &[
                ("host", "127.0.0.1:8080"),
                ("origin", "http://127.0.0.1:8080"),
                ("sec-fetch-site", "same-origin"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(backend.state.bookings.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_failed_action_notice_shows_once() {
    let backend = MockBackend::start().await;
    backend
        .state
        .fail_requests
        .store(true, std::sync::atomic::Ordering::SeqCst);
    let (app, _) = dashboard(&backend, ViewMode::Booking);

    let response = app
        .clone()
        .oneshot(post_form("/actions/request-booking", "slotId=3&returnTo=https://evil.example"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let html = body_text(app.clone().oneshot(get("/bookings")).await.unwrap()).await;
    assert!(html.contains(r#"class="notice notice-error" role="alert""#));
    assert!(html.contains("Request booking failed"));

    let html = body_text(app.oneshot(get("/bookings")).await.unwrap()).await;
    assert!(!html.contains(r#"role="alert""#));
}

#[tokio::test]
async fn test_action_post_rejects_bad_input() {
    let backend = MockBackend::start().await;
    let (app, state) = dashboard(&backend, ViewMode::Both);

    let response = app
        .clone()
        .oneshot(post_form("/actions/launch-rocket", "returnTo=%2F"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(post_form("/actions/cancel-booking", "bookingId=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.notices.len(), 1);
}
