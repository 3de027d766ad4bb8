//! Slotwatch Library
//!
//! Core modules for the parking-slot dashboard: the backend API client, the
//! view renderers, the panel refresher and the operator command dispatcher.

pub mod app;
pub mod commands;
pub mod errors;
pub mod filesys;
pub mod http;
pub mod logs;
pub mod refresh;
pub mod server;
pub mod storage;
pub mod utils;
pub mod view;
pub mod workers;
