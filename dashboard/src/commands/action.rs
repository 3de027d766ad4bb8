//! Operator actions
//!
//! An [`Action`] is a fully specified mutating command. Its [`ActionKind`] is the
//! identifier used in `/actions/{kind}` routes and for handler lookup.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::DashboardError;

/// Identifier of an operator action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    OpenGate,
    SetExitApproved,
    ApproveUser,
    RejectUser,
    RequestBooking,
    CancelBooking,
    ApproveBooking,
    RejectBooking,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::OpenGate,
        ActionKind::SetExitApproved,
        ActionKind::ApproveUser,
        ActionKind::RejectUser,
        ActionKind::RequestBooking,
        ActionKind::CancelBooking,
        ActionKind::ApproveBooking,
        ActionKind::RejectBooking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::OpenGate => "open-gate",
            ActionKind::SetExitApproved => "set-exit-approved",
            ActionKind::ApproveUser => "approve-user",
            ActionKind::RejectUser => "reject-user",
            ActionKind::RequestBooking => "request-booking",
            ActionKind::CancelBooking => "cancel-booking",
            ActionKind::ApproveBooking => "approve-booking",
            ActionKind::RejectBooking => "reject-booking",
        }
    }

    /// Operator-facing name, used in notices
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::OpenGate => "Open gate",
            ActionKind::SetExitApproved => "Set exit approval",
            ActionKind::ApproveUser => "Approve user",
            ActionKind::RejectUser => "Reject user",
            ActionKind::RequestBooking => "Request booking",
            ActionKind::CancelBooking => "Cancel booking",
            ActionKind::ApproveBooking => "Approve booking",
            ActionKind::RejectBooking => "Reject booking",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownAction(s.to_string()))
    }
}

/// A mutating operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the entrance gate; `None` addresses the caller's own site
    OpenGate { device_id: Option<String> },
    SetExitApproved {
        device_id: Option<String>,
        approved: bool,
    },
    ApproveUser { user_id: i64 },
    RejectUser { user_id: i64 },
    RequestBooking { slot_id: i64 },
    CancelBooking { booking_id: i64 },
    /// Approve a booking; the backend opens the gate as part of it
    ApproveBooking { booking_id: i64 },
    RejectBooking { booking_id: i64 },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::OpenGate { .. } => ActionKind::OpenGate,
            Action::SetExitApproved { .. } => ActionKind::SetExitApproved,
            Action::ApproveUser { .. } => ActionKind::ApproveUser,
            Action::RejectUser { .. } => ActionKind::RejectUser,
            Action::RequestBooking { .. } => ActionKind::RequestBooking,
            Action::CancelBooking { .. } => ActionKind::CancelBooking,
            Action::ApproveBooking { .. } => ActionKind::ApproveBooking,
            Action::RejectBooking { .. } => ActionKind::RejectBooking,
        }
    }

    /// Form fields that identify this action's target
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Action::OpenGate { device_id } => device_id
                .iter()
                .map(|id| ("deviceId", id.clone()))
                .collect(),
            Action::SetExitApproved {
                device_id,
                approved,
            } => {
                let mut fields: Vec<_> = device_id
                    .iter()
                    .map(|id| ("deviceId", id.clone()))
                    .collect();
                fields.push(("approved", approved.to_string()));
                fields
            }
            Action::ApproveUser { user_id } | Action::RejectUser { user_id } => {
                vec![("userId", user_id.to_string())]
            }
            Action::RequestBooking { slot_id } => vec![("slotId", slot_id.to_string())],
            Action::CancelBooking { booking_id }
            | Action::ApproveBooking { booking_id }
            | Action::RejectBooking { booking_id } => {
                vec![("bookingId", booking_id.to_string())]
            }
        }
    }

    /// Rebuild an action from posted form fields
    pub fn from_form(
        kind: ActionKind,
        fields: &HashMap<String, String>,
    ) -> Result<Self, DashboardError> {
        let action = match kind {
            ActionKind::OpenGate => Action::OpenGate {
                device_id: optional_text(fields, "deviceId"),
            },
            ActionKind::SetExitApproved => Action::SetExitApproved {
                device_id: optional_text(fields, "deviceId"),
                approved: required_bool(fields, "approved")?,
            },
            ActionKind::ApproveUser => Action::ApproveUser {
                user_id: required_id(fields, "userId")?,
            },
            ActionKind::RejectUser => Action::RejectUser {
                user_id: required_id(fields, "userId")?,
            },
            ActionKind::RequestBooking => Action::RequestBooking {
                slot_id: required_id(fields, "slotId")?,
            },
            ActionKind::CancelBooking => Action::CancelBooking {
                booking_id: required_id(fields, "bookingId")?,
            },
            ActionKind::ApproveBooking => Action::ApproveBooking {
                booking_id: required_id(fields, "bookingId")?,
            },
            ActionKind::RejectBooking => Action::RejectBooking {
                booking_id: required_id(fields, "bookingId")?,
            },
        };
        Ok(action)
    }
}

fn optional_text(fields: &HashMap<String, String>, name: &str) -> Option<String> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_id(fields: &HashMap<String, String>, name: &str) -> Result<i64, DashboardError> {
    let raw = fields
        .get(name)
        .ok_or_else(|| DashboardError::InvalidAction(format!("missing field {name}")))?;
    raw.trim()
        .parse()
        .map_err(|_| DashboardError::InvalidAction(format!("{name} is not an id: {raw}")))
}

fn required_bool(fields: &HashMap<String, String>, name: &str) -> Result<bool, DashboardError> {
    match fields.get(name).map(|v| v.trim()) {
        Some("true") | Some("1") | Some("on") => Ok(true),
        Some("false") | Some("0") | Some("off") => Ok(false),
        Some(other) => Err(DashboardError::InvalidAction(format!(
            "{name} is not a boolean: {other}"
        ))),
        None => Err(DashboardError::InvalidAction(format!("missing field {name}"))),
    }
}
