use serde::{Deserialize, Serialize};

use super::nullable;

/// Booking state of a slot on the booking page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Free,
    Booked,
    /// Occupied, or any state the dashboard does not know about
    #[default]
    #[serde(other)]
    Occupied,
}

impl SlotState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotState::Free => "free",
            SlotState::Booked => "booked",
            SlotState::Occupied => "occupied",
        }
    }
}

/// A slot as shown on the booking page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slot {
    pub id: Option<i64>,
    #[serde(deserialize_with = "nullable")]
    pub state: SlotState,
    #[serde(deserialize_with = "nullable")]
    pub occupied: bool,
    #[serde(deserialize_with = "nullable")]
    pub booked: bool,
}

/// Slot and role snapshot returned by `GET /api/slots`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlotsView {
    pub device_id: Option<String>,
    #[serde(rename = "bookingTTLMin")]
    pub booking_ttl_min: Option<i64>,
    pub user_role: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub slots: Vec<Slot>,
}

impl SlotsView {
    pub fn is_admin(&self) -> bool {
        self.user_role.as_deref() == Some("admin")
    }
}
