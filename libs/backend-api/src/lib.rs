//! Parking backend API models
//!
//! Every type in here is a read-only projection of the backend's camelCase JSON.
//! Fields are optional on the wire and fall back to defaults on decode, so a
//! partially populated record never fails a whole snapshot.

pub mod models;
pub mod normalize;

pub use normalize::normalize_slots;
