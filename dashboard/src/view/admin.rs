//! Admin moderation renderers

use askama::Template;
use backend_api::models::{AdminBookingView, AdminUser, UserStatus};

use crate::commands::action::Action;
use crate::view::binder::ActionBinder;
use crate::view::html::{escape, escape_opt, escape_or};
use crate::view::layout::Table;
use crate::view::{render, MISSING, UNKNOWN};

#[derive(Template)]
#[template(path = "admin_user_row.html")]
struct UserRow {
    name: String,
    email: String,
    status: String,
    actions: Vec<String>,
}

#[derive(Template)]
#[template(path = "admin_booking_row.html")]
struct BookingRow {
    id: String,
    slot_id: String,
    name: String,
    email: String,
    expires_at: String,
    actions: Vec<String>,
}

/// One pending registration with Approve / Reject
pub fn admin_user_row(user: &AdminUser, binder: &dyn ActionBinder) -> String {
    let actions = match user.id {
        Some(user_id) => vec![
            binder.control(&Action::ApproveUser { user_id }, "Approve", "success"),
            binder.control(&Action::RejectUser { user_id }, "Reject", "danger"),
        ],
        None => Vec::new(),
    };

    render(&UserRow {
        name: escape_or(user.full_name.as_deref(), MISSING),
        email: escape_or(user.email.as_deref(), MISSING),
        status: escape(user.status.as_str()),
        actions,
    })
}

/// One pending booking with its owner; approval also opens the gate
pub fn admin_booking_row(booking: &AdminBookingView, binder: &dyn ActionBinder) -> String {
    let actions = match booking.id {
        Some(booking_id) => vec![
            binder.control(
                &Action::ApproveBooking { booking_id },
                "Approve & Open Gate",
                "success",
            ),
            binder.control(&Action::RejectBooking { booking_id }, "Reject", "danger"),
        ],
        None => Vec::new(),
    };

    render(&BookingRow {
        id: escape_or(booking.id, MISSING),
        slot_id: escape_or(booking.slot_id, MISSING),
        name: escape_or(booking.user.full_name.as_deref(), MISSING),
        email: escape_opt(booking.user.email.as_deref()),
        expires_at: escape_or(booking.expires_at.as_deref(), UNKNOWN),
        actions,
    })
}

/// Content of the pending-users panel
///
/// Only users still pending are actionable, whatever the endpoint returned.
pub fn admin_users_panel(users: &[AdminUser], binder: &dyn ActionBinder) -> String {
    render(&Table {
        class: "admin-users",
        headers: vec!["Name", "Email", "Status", ""],
        rows: users
            .iter()
            .filter(|u| u.status == UserStatus::Pending)
            .map(|u| admin_user_row(u, binder))
            .collect(),
        empty: "No registrations awaiting approval.",
    })
}

/// Content of the pending-bookings panel
pub fn admin_bookings_panel(bookings: &[AdminBookingView], binder: &dyn ActionBinder) -> String {
    render(&Table {
        class: "admin-bookings",
        headers: vec!["Booking", "Slot", "User", "Expires", ""],
        rows: bookings
            .iter()
            .map(|b| admin_booking_row(b, binder))
            .collect(),
        empty: "No bookings awaiting approval.",
    })
}
