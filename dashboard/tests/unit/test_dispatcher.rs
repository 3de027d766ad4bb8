//! Command dispatch tests

use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use slotwatch::app::options::AppOptions;
use slotwatch::app::state::AppState;
use slotwatch::commands::action::{Action, ActionKind};
use slotwatch::commands::dispatcher::CommandHandler;
use slotwatch::commands::notice::NoticeLevel;
use slotwatch::errors::DashboardError;
use slotwatch::refresh::panel::{PanelId, PanelState};
use slotwatch::refresh::refresher::ViewMode;

use crate::mock_backend::MockBackend;

fn app_state(backend: &MockBackend) -> AppState {
    let options = AppOptions {
        view_mode: ViewMode::Booking,
        ..Default::default()
    };
    AppState::with_client(backend.client(), &options)
}

#[tokio::test]
async fn test_request_booking_then_refresh_shows_booking() {
    let backend = MockBackend::start().await;
    let state = app_state(&backend);

    let ack = state
        .dispatcher
        .dispatch(Action::RequestBooking { slot_id: 3 })
        .await
        .unwrap();
    assert_eq!(ack["ok"], json!(true));

    let mine = state.panels.get(PanelId::MyBookings);
    assert_eq!(mine.state, PanelState::Ready);
    assert!(mine.content.contains("Slot 3"));
    assert!(mine.content.contains(">Cancel</button>"));

    let notices = state.notices.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Info);
    assert_eq!(notices[0].message, "Request booking succeeded");
}

#[tokio::test]
async fn test_failed_command_queues_notice() {
    let backend = MockBackend::start().await;
    backend.state.fail_requests.store(true, Ordering::SeqCst);
    let state = app_state(&backend);

    let err = state
        .dispatcher
        .dispatch(Action::RequestBooking { slot_id: 3 })
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));

    // no refresh after a failed command
    assert_eq!(state.panels.get(PanelId::MyBookings).state, PanelState::Idle);

    let notices = state.notices.drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.starts_with("Request booking failed"));
    assert!(notices[0].message.contains("slot table locked"));
}

struct Rejecting;

#[async_trait]
impl CommandHandler for Rejecting {
    async fn handle(&self, _action: &Action) -> Result<Value, DashboardError> {
        Err(DashboardError::Internal("gate offline".to_string()))
    }
}

#[tokio::test]
async fn test_registered_handler_replaces_default() {
    let backend = MockBackend::start().await;
    let options = AppOptions::default();
    let state = AppState::with_client(backend.client(), &options);

    let mut dispatcher = slotwatch::commands::dispatcher::CommandDispatcher::with_backend(
        state.http_client.clone(),
        state.refresher.clone(),
        state.notices.clone(),
    );
    dispatcher.register(ActionKind::OpenGate, Arc::new(Rejecting));

    let result = dispatcher
        .dispatch(Action::OpenGate {
            device_id: Some("gate-1".to_string()),
        })
        .await;
    assert!(result.is_err());
    assert!(state.notices.drain()[0].message.contains("gate offline"));
}
