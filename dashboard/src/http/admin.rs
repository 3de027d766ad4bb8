//! Admin API client
//!
//! Every endpoint here answers 401/403 for non-admin callers.

use backend_api::models::{AdminBookingView, AdminUser, BookingDecision, UserDecision};
use serde_json::Value;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

/// Moderation verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

impl HttpClient {
    /// List registrations awaiting moderation
    pub async fn pending_users(&self) -> Result<Vec<AdminUser>, DashboardError> {
        self.get_json("/api/admin/users/pending").await
    }

    /// List bookings awaiting moderation
    pub async fn pending_bookings(&self) -> Result<Vec<AdminBookingView>, DashboardError> {
        self.get_json("/api/admin/bookings/pending").await
    }

    /// Approve or reject a registration
    pub async fn decide_user(
        &self,
        user_id: i64,
        decision: Decision,
    ) -> Result<Value, DashboardError> {
        let path = format!("/api/admin/users/{}", decision.as_str());
        self.post_json(&path, &UserDecision { user_id }).await
    }

    /// Approve (and open the gate for) or reject a booking
    pub async fn decide_booking(
        &self,
        booking_id: i64,
        decision: Decision,
    ) -> Result<Value, DashboardError> {
        let path = format!("/api/admin/bookings/{}", decision.as_str());
        self.post_json(&path, &BookingDecision { booking_id }).await
    }
}
