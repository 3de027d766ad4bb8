use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::nullable;

/// Snapshot of one monitored site/gate, as returned by `GET /api/devices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Device {
    pub device_id: Option<String>,
    pub last_seen: Option<String>,
    pub last_msg_count: Option<i64>,
    pub entrance_cm: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub exit_approved: bool,
    /// Either a slot list or an `{available, occupied}` summary; see
    /// [`crate::normalize_slots`].
    pub slots: Value,
    #[serde(deserialize_with = "nullable")]
    pub is_admin: bool,
}

/// A slot as shown on the device dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSlot {
    pub id: u64,
    pub occupied: bool,
    pub booked: bool,
}

impl DeviceSlot {
    pub fn free(id: u64) -> Self {
        Self {
            id,
            occupied: false,
            booked: false,
        }
    }
}
