//! Operator commands

pub mod action;
pub mod dispatcher;
pub mod notice;
