//! Backend HTTP API

pub mod admin;
pub mod bookings;
pub mod client;
pub mod commands;
pub mod devices;
pub mod diagnostics;
pub mod slots;
