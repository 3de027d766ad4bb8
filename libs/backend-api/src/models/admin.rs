use serde::{Deserialize, Serialize};

use super::nullable;

/// Registration status of a user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Pending,
    Approved,
    Rejected,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Approved => "approved",
            UserStatus::Rejected => "rejected",
            UserStatus::Unknown => "unknown",
        }
    }
}

/// A registration awaiting moderation (`GET /api/admin/users/pending`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: UserStatus,
}

/// Owner details embedded in an admin booking row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingOwner {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// A booking together with its owner (`GET /api/admin/bookings/pending`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminBookingView {
    pub id: Option<i64>,
    pub slot_id: Option<i64>,
    pub expires_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub user: BookingOwner,
}
