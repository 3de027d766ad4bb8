//! API models

mod admin;
mod booking;
mod device;
mod requests;
mod slot;

pub use admin::{AdminBookingView, AdminUser, BookingOwner, UserStatus};
pub use booking::{Booking, BookingStatus};
pub use device::{Device, DeviceSlot};
pub use requests::{BookingCancel, BookingDecision, BookingRequest, ExitApproval, UserDecision};
pub use slot::{Slot, SlotState, SlotsView};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
