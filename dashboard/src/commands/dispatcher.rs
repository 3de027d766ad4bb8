//! Command dispatcher
//!
//! Maps each [`ActionKind`] to the handler that performs it. A successful
//! command refreshes every panel immediately and queues a confirmation; a
//! failed one queues an error notice and is returned to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, info};

use crate::commands::action::{Action, ActionKind};
use crate::commands::notice::{Notice, NoticeBoard};
use crate::errors::DashboardError;
use crate::http::admin::Decision;
use crate::http::client::HttpClient;
use crate::refresh::refresher::Refresher;

/// Performs one kind of action against the backend
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Issue the action's single backend call
    async fn handle(&self, action: &Action) -> Result<Value, DashboardError>;
}

/// Gate commands: open gate, set or revoke exit approval
pub struct GateHandler {
    http_client: Arc<HttpClient>,
}

#[async_trait]
impl CommandHandler for GateHandler {
    async fn handle(&self, action: &Action) -> Result<Value, DashboardError> {
        match action {
            Action::OpenGate { device_id } => {
                self.http_client.open_gate(device_id.as_deref()).await
            }
            Action::SetExitApproved {
                device_id,
                approved,
            } => {
                self.http_client
                    .set_exit_approved(device_id.as_deref(), *approved)
                    .await
            }
            other => Err(mismatch("gate", other)),
        }
    }
}

/// The caller's own bookings: request and cancel
pub struct BookingHandler {
    http_client: Arc<HttpClient>,
}

#[async_trait]
impl CommandHandler for BookingHandler {
    async fn handle(&self, action: &Action) -> Result<Value, DashboardError> {
        match action {
            Action::RequestBooking { slot_id } => self.http_client.request_booking(*slot_id).await,
            Action::CancelBooking { booking_id } => {
                self.http_client.cancel_booking(*booking_id).await
            }
            other => Err(mismatch("booking", other)),
        }
    }
}

/// Admin moderation of registrations and bookings
pub struct ModerationHandler {
    http_client: Arc<HttpClient>,
}

#[async_trait]
impl CommandHandler for ModerationHandler {
    async fn handle(&self, action: &Action) -> Result<Value, DashboardError> {
        match action {
            Action::ApproveUser { user_id } => {
                self.http_client.decide_user(*user_id, Decision::Approve).await
            }
            Action::RejectUser { user_id } => {
                self.http_client.decide_user(*user_id, Decision::Reject).await
            }
            Action::ApproveBooking { booking_id } => {
                self.http_client
                    .decide_booking(*booking_id, Decision::Approve)
                    .await
            }
            Action::RejectBooking { booking_id } => {
                self.http_client
                    .decide_booking(*booking_id, Decision::Reject)
                    .await
            }
            other => Err(mismatch("moderation", other)),
        }
    }
}

fn mismatch(handler: &str, action: &Action) -> DashboardError {
    DashboardError::Internal(format!(
        "{} handler cannot perform {}",
        handler,
        action.kind()
    ))
}

/// Routes actions to their handlers
pub struct CommandDispatcher {
    handlers: HashMap<ActionKind, Arc<dyn CommandHandler>>,
    refresher: Arc<Refresher>,
    notices: Arc<NoticeBoard>,
}

impl CommandDispatcher {
    /// Create a dispatcher with no handlers registered
    pub fn new(refresher: Arc<Refresher>, notices: Arc<NoticeBoard>) -> Self {
        Self {
            handlers: HashMap::new(),
            refresher,
            notices,
        }
    }

    /// Create a dispatcher wired to the backend for every action
    pub fn with_backend(
        http_client: Arc<HttpClient>,
        refresher: Arc<Refresher>,
        notices: Arc<NoticeBoard>,
    ) -> Self {
        let gate: Arc<dyn CommandHandler> = Arc::new(GateHandler {
            http_client: http_client.clone(),
        });
        let booking: Arc<dyn CommandHandler> = Arc::new(BookingHandler {
            http_client: http_client.clone(),
        });
        let moderation: Arc<dyn CommandHandler> = Arc::new(ModerationHandler { http_client });

        let mut dispatcher = Self::new(refresher, notices);
        dispatcher.register(ActionKind::OpenGate, gate.clone());
        dispatcher.register(ActionKind::SetExitApproved, gate);
        dispatcher.register(ActionKind::RequestBooking, booking.clone());
        dispatcher.register(ActionKind::CancelBooking, booking);
        dispatcher.register(ActionKind::ApproveUser, moderation.clone());
        dispatcher.register(ActionKind::RejectUser, moderation.clone());
        dispatcher.register(ActionKind::ApproveBooking, moderation.clone());
        dispatcher.register(ActionKind::RejectBooking, moderation);
        dispatcher
    }

    /// Register (or replace) the handler for an action kind
    pub fn register(&mut self, kind: ActionKind, handler: Arc<dyn CommandHandler>) {
        self.handlers.insert(kind, handler);
    }

    pub fn notices(&self) -> &Arc<NoticeBoard> {
        &self.notices
    }

    /// Perform an action
    ///
    /// Success refreshes all panels and queues a confirmation before returning.
    /// Failure queues an error notice and skips the refresh.
    pub async fn dispatch(&self, action: Action) -> Result<Value, DashboardError> {
        let kind = action.kind();
        let result = match self.handlers.get(&kind) {
            Some(handler) => handler.handle(&action).await,
            None => Err(DashboardError::UnknownAction(kind.to_string())),
        };

        match result {
            Ok(ack) => {
                info!("Action {} succeeded: {:?}", kind, action);
                self.refresher.refresh_now().await;
                self.notices
                    .push(Notice::info(format!("{} succeeded", kind.label())));
                Ok(ack)
            }
            Err(e) => {
                error!("Action {} failed: {}", kind, e);
                self.notices
                    .push(Notice::error(format!("{} failed: {}", kind.label(), e)));
                Err(e)
            }
        }
    }
}
