//! Booking API client

use backend_api::models::{Booking, BookingCancel, BookingRequest};
use serde_json::Value;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List the caller's own bookings
    pub async fn my_bookings(&self) -> Result<Vec<Booking>, DashboardError> {
        self.get_json("/api/bookings/me").await
    }

    /// Request a booking for a slot
    pub async fn request_booking(&self, slot_id: i64) -> Result<Value, DashboardError> {
        self.post_json("/api/bookings/request", &BookingRequest { slot_id })
            .await
    }

    /// Cancel one of the caller's bookings
    pub async fn cancel_booking(&self, booking_id: i64) -> Result<Value, DashboardError> {
        self.post_json("/api/bookings/cancel", &BookingCancel { booking_id })
            .await
    }
}
