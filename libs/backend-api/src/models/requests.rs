use serde::{Deserialize, Serialize};

/// Body of `POST /api/bookings/request`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub slot_id: i64,
}

/// Body of `POST /api/bookings/cancel`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCancel {
    pub booking_id: i64,
}

/// Body of `POST /api/admin/users/{approve,reject}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDecision {
    pub user_id: i64,
}

/// Body of `POST /api/admin/bookings/{approve,reject}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDecision {
    pub booking_id: i64,
}

/// Body of `POST /api/cmd/exit-approved` on the booking page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitApproval {
    pub approved: bool,
}
