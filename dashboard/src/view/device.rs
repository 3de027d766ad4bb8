//! Device dashboard renderers

use askama::Template;
use backend_api::models::{Device, DeviceSlot};
use backend_api::normalize_slots;

use crate::commands::action::Action;
use crate::view::binder::ActionBinder;
use crate::view::html::{escape, escape_display, escape_or};
use crate::view::{render, MISSING, UNKNOWN};

#[derive(Template)]
#[template(path = "device_slot_tile.html")]
struct SlotTile {
    id: String,
    occupancy_class: &'static str,
    occupancy: &'static str,
    booking_class: &'static str,
    booking: &'static str,
}

#[derive(Template)]
#[template(path = "device_card.html")]
struct DeviceCard {
    id: String,
    last_seen: String,
    count: String,
    cm: String,
    exit_class: &'static str,
    exit_label: &'static str,
    tiles: Vec<String>,
    admin: String,
}

#[derive(Template)]
#[template(path = "devices_panel.html")]
struct DevicesPanel {
    cards: Vec<String>,
}

/// Gate controls shared by device cards and the booking page
#[derive(Template)]
#[template(path = "gate_controls.html")]
pub(crate) struct GateControls {
    controls: Vec<String>,
}

impl GateControls {
    /// Open Gate, Approve Exit and Revoke Exit for `device_id`
    pub(crate) fn for_device(device_id: Option<String>, binder: &dyn ActionBinder) -> Self {
        Self {
            controls: vec![
                binder.control(
                    &Action::OpenGate {
                        device_id: device_id.clone(),
                    },
                    "Open Gate",
                    "primary",
                ),
                binder.control(
                    &Action::SetExitApproved {
                        device_id: device_id.clone(),
                        approved: true,
                    },
                    "Approve Exit",
                    "success",
                ),
                binder.control(
                    &Action::SetExitApproved {
                        device_id,
                        approved: false,
                    },
                    "Revoke Exit",
                    "danger",
                ),
            ],
        }
    }
}

#[derive(Template)]
#[template(path = "admin_placeholder.html")]
struct AdminPlaceholder {
    message: &'static str,
}

/// One slot tile with an occupancy badge and a booking badge
pub fn device_slot_tile(slot: &DeviceSlot) -> String {
    let (occupancy_class, occupancy) = if slot.occupied {
        ("badge-occupied", "Occupied")
    } else {
        ("badge-free", "Free")
    };
    let (booking_class, booking) = if slot.booked {
        ("badge-booked", "Booked")
    } else {
        ("badge-unbooked", "Not booked")
    };

    render(&SlotTile {
        id: escape_display(slot.id),
        occupancy_class,
        occupancy,
        booking_class,
        booking,
    })
}

/// Entrance distance without a trailing `.0` for whole centimetres
fn format_cm(cm: f64) -> String {
    if cm.fract() == 0.0 && cm.abs() < 1e15 {
        format!("{}", cm as i64)
    } else {
        format!("{cm}")
    }
}

fn admin_controls(device: &Device, binder: &dyn ActionBinder) -> String {
    if !device.is_admin {
        return render(&AdminPlaceholder {
            message: "Gate controls are available to administrators only.",
        });
    }

    let Some(device_id) = device.device_id.as_deref() else {
        return render(&AdminPlaceholder {
            message: "Device id unknown; gate controls unavailable.",
        });
    };

    render(&GateControls::for_device(Some(device_id.to_string()), binder))
}

/// Full card for one device
pub fn device_card(device: &Device, binder: &dyn ActionBinder) -> String {
    let (exit_class, exit_label) = if device.exit_approved {
        ("yes", "Yes")
    } else {
        ("no", "No")
    };

    render(&DeviceCard {
        id: escape_or(device.device_id.as_deref(), UNKNOWN),
        last_seen: escape_or(device.last_seen.as_deref(), UNKNOWN),
        count: escape_or(device.last_msg_count, MISSING),
        cm: escape(&device.entrance_cm.map(format_cm).unwrap_or_else(|| MISSING.to_string())),
        exit_class,
        exit_label,
        tiles: normalize_slots(&device.slots)
            .iter()
            .map(device_slot_tile)
            .collect(),
        admin: admin_controls(device, binder),
    })
}

/// Content of the devices panel
pub fn devices_panel(devices: &[Device], binder: &dyn ActionBinder) -> String {
    render(&DevicesPanel {
        cards: devices.iter().map(|d| device_card(d, binder)).collect(),
    })
}
