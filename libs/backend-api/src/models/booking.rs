use serde::{Deserialize, Serialize};

use super::nullable;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    Expired,
    #[default]
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Expired => "expired",
            BookingStatus::Unknown => "unknown",
        }
    }

    /// Whether the owner may still cancel a booking in this status
    pub fn is_cancellable(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Approved)
    }
}

/// One of the caller's bookings, as returned by `GET /api/bookings/me`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Booking {
    pub id: Option<i64>,
    pub slot_id: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub status: BookingStatus,
    pub expires_at: Option<String>,
}
