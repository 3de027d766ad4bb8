//! Booking page renderers

use askama::Template;
use backend_api::models::{Booking, Slot, SlotState, SlotsView};

use crate::commands::action::Action;
use crate::view::binder::{disabled_control, ActionBinder};
use crate::view::device::GateControls;
use crate::view::html::{escape, escape_or};
use crate::view::layout::Table;
use crate::view::{render, MISSING, UNKNOWN};

#[derive(Template)]
#[template(path = "slot_card.html")]
struct SlotCard {
    id: String,
    state: &'static str,
    occupied: &'static str,
    booked: &'static str,
    action: String,
}

#[derive(Template)]
#[template(path = "slots_panel.html")]
struct SlotsPanel {
    device_id: String,
    ttl: String,
    role: String,
    cards: Vec<String>,
    controls: String,
}

#[derive(Template)]
#[template(path = "booking_row.html")]
struct BookingRow {
    id: String,
    slot_id: String,
    status: String,
    expires_at: String,
    cancel: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// One slot card; only a free slot offers "Request Booking"
pub fn slot_card(slot: &Slot, binder: &dyn ActionBinder) -> String {
    let action = match (slot.state, slot.id) {
        (SlotState::Free, Some(slot_id)) => binder.control(
            &Action::RequestBooking { slot_id },
            "Request Booking",
            "primary",
        ),
        _ => disabled_control("Unavailable", "muted"),
    };

    render(&SlotCard {
        id: escape_or(slot.id, MISSING),
        state: slot.state.as_str(),
        occupied: yes_no(slot.occupied),
        booked: yes_no(slot.booked),
        action,
    })
}

/// Content of the slots panel: site header, slot grid, and admin gate controls
///
/// Gate controls here address the caller's own site, so they carry no device id.
pub fn slots_panel(view: &SlotsView, binder: &dyn ActionBinder) -> String {
    let controls = if view.is_admin() {
        render(&GateControls::for_device(None, binder))
    } else {
        String::new()
    };

    render(&SlotsPanel {
        device_id: escape_or(view.device_id.as_deref(), UNKNOWN),
        ttl: escape_or(view.booking_ttl_min, MISSING),
        role: escape_or(view.user_role.as_deref(), UNKNOWN),
        cards: view.slots.iter().map(|s| slot_card(s, binder)).collect(),
        controls,
    })
}

/// One row of the caller's bookings; Cancel only while pending or approved
pub fn booking_row(booking: &Booking, binder: &dyn ActionBinder) -> String {
    let cancel = match booking.id {
        Some(booking_id) if booking.status.is_cancellable() => binder.control(
            &Action::CancelBooking { booking_id },
            "Cancel",
            "danger",
        ),
        _ => String::new(),
    };

    render(&BookingRow {
        id: escape_or(booking.id, MISSING),
        slot_id: escape_or(booking.slot_id, MISSING),
        status: escape(booking.status.as_str()),
        expires_at: escape_or(booking.expires_at.as_deref(), UNKNOWN),
        cancel,
    })
}

/// Content of the "my bookings" panel
pub fn my_bookings_panel(bookings: &[Booking], binder: &dyn ActionBinder) -> String {
    render(&Table {
        class: "bookings",
        headers: vec!["Booking", "Slot", "Status", "Expires", ""],
        rows: bookings.iter().map(|b| booking_row(b, binder)).collect(),
        empty: "You have no bookings.",
    })
}
