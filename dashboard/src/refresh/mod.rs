//! Panel refresh

pub mod panel;
pub mod refresher;
