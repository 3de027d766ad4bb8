//! Panel refresh tests

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;

use slotwatch::http::client::{ClientOptions, HttpClient};
use slotwatch::refresh::panel::{PanelId, PanelState, PanelStore};
use slotwatch::refresh::refresher::{Binders, Refresher, TickOutcome, ViewMode};
use slotwatch::view::binder::FormBinder;

use crate::mock_backend::MockBackend;

fn refresher(backend: &MockBackend, mode: ViewMode) -> Refresher {
    let binders = Binders {
        devices: Arc::new(FormBinder::new("/actions", "/")),
        bookings: Arc::new(FormBinder::new("/actions", "/bookings")),
    };
    Refresher::new(backend.client(), Arc::new(PanelStore::new()), binders, mode)
}

#[tokio::test]
async fn test_device_panel_renders_snapshot() {
    let backend = MockBackend::start().await;
    let refresher = refresher(&backend, ViewMode::Device);

    refresher.refresh_now().await;

    let panel = refresher.panels().get(PanelId::Devices);
    assert_eq!(panel.state, PanelState::Ready);
    assert!(panel.status.contains("1 device(s)"));
    assert!(panel.content.contains("gate-&lt;1&gt;"));
    assert!(!panel.content.contains("gate-<1>"));
    assert!(panel.content.contains("Slot 4"));
    assert!(panel.content.contains("Open Gate"));

    // booking routines are not part of the device view
    assert_eq!(refresher.panels().get(PanelId::Slots).state, PanelState::Idle);
}

#[tokio::test]
async fn test_booking_panels_render() {
    let backend = MockBackend::start().await;
    let refresher = refresher(&backend, ViewMode::Booking);

    refresher.refresh_now().await;

    let slots = refresher.panels().get(PanelId::Slots);
    assert_eq!(slots.state, PanelState::Ready);
    assert!(slots.content.contains("Request Booking"));

    let mine = refresher.panels().get(PanelId::MyBookings);
    assert!(mine.content.contains("You have no bookings."));

    let users = refresher.panels().get(PanelId::AdminUsers);
    assert_eq!(users.state, PanelState::Ready);
    assert!(users.content.contains("ada@example.com"));

    assert_eq!(backend.state.device_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_admin_forbidden_hides_panels() {
    let backend = MockBackend::start().await;
    backend.set_admin_status(StatusCode::FORBIDDEN);
    let refresher = refresher(&backend, ViewMode::Booking);

    refresher.refresh_now().await;

    assert_eq!(refresher.panels().get(PanelId::AdminUsers).state, PanelState::Hidden);
    assert_eq!(refresher.panels().get(PanelId::AdminBookings).state, PanelState::Hidden);
    assert_eq!(refresher.panels().get(PanelId::Slots).state, PanelState::Ready);
}

#[tokio::test]
async fn test_admin_server_error_is_shown() {
    let backend = MockBackend::start().await;
    backend.set_admin_status(StatusCode::INTERNAL_SERVER_ERROR);
    let refresher = refresher(&backend, ViewMode::Booking);

    refresher.refresh_now().await;

    let users = refresher.panels().get(PanelId::AdminUsers);
    assert_eq!(users.state, PanelState::Failed);
    assert!(users.status.contains("HTTP 500"));
    assert!(users.content.contains(r#"<pre class="error">"#));
    assert!(users.content.contains("Admin only"));
}

#[tokio::test]
async fn test_admin_panels_show_loading_while_fetching() {
    let backend = MockBackend::start().await;
    backend.set_admin_delay(Duration::from_millis(400));
    let refresher = refresher(&backend, ViewMode::Booking);

    let (_, during) = tokio::join!(refresher.refresh_now(), async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        (
            refresher.panels().get(PanelId::AdminUsers),
            refresher.panels().get(PanelId::AdminBookings),
        )
    });

    let (users, bookings) = during;
    assert_eq!(users.state, PanelState::Loading);
    assert_eq!(users.status, "Loading...");
    assert_eq!(bookings.state, PanelState::Loading);

    assert_eq!(refresher.panels().get(PanelId::AdminUsers).state, PanelState::Ready);
    assert_eq!(refresher.panels().get(PanelId::AdminBookings).state, PanelState::Ready);
}

#[tokio::test]
async fn test_overlapping_tick_is_skipped() {
    let backend = MockBackend::start().await;
    backend.set_device_delay(Duration::from_millis(400));
    let refresher = refresher(&backend, ViewMode::Device);

    let (first, second) = tokio::join!(refresher.try_refresh(), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        refresher.try_refresh().await
    });

    assert_eq!(first, TickOutcome::Completed);
    assert_eq!(second, TickOutcome::Skipped);
    assert_eq!(backend.state.device_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unreachable_backend_fails_panel_inline() {
    // nothing listens on the discard port
    let client = HttpClient::new(&ClientOptions {
        base_url: "http://127.0.0.1:9".to_string(),
        ..Default::default()
    })
    .unwrap();
    let binders = Binders {
        devices: Arc::new(FormBinder::new("/actions", "/")),
        bookings: Arc::new(FormBinder::new("/actions", "/bookings")),
    };
    let refresher = Refresher::new(
        Arc::new(client),
        Arc::new(PanelStore::new()),
        binders,
        ViewMode::Device,
    );

    assert_eq!(refresher.try_refresh().await, TickOutcome::Completed);

    let panel = refresher.panels().get(PanelId::Devices);
    assert_eq!(panel.state, PanelState::Failed);
    assert_eq!(panel.status, "Failed to load devices: backend unreachable");
    assert!(panel.content.contains(r#"<pre class="error">"#));
}
