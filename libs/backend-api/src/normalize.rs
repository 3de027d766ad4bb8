//! Slot normalization for device snapshots
//!
//! The device endpoint reports slots either as an explicit list or as an
//! `{available, occupied}` summary, and older firmware sends nothing at all.
//! [`normalize_slots`] turns all three shapes into one ordered slot list.

use serde_json::Value;

use crate::models::DeviceSlot;

/// Slot count synthesized when a device reports no usable slot data
pub const MIN_SLOTS: usize = 4;

/// Upper bound on synthesized slots, so a corrupt summary cannot blow up a page
pub const MAX_SYNTHESIZED_SLOTS: usize = 1024;

/// Normalize raw device slot data into an ordered list of slots
///
/// - a list maps each entry to `{id, occupied, booked}`, falling back to the
///   1-based position when the entry has no numeric id
/// - a summary yields `max(4, available + occupied)` slots, the first
///   `occupied` of them occupied and none booked
/// - anything else yields [`MIN_SLOTS`] free slots
pub fn normalize_slots(raw: &Value) -> Vec<DeviceSlot> {
    match raw {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| DeviceSlot {
                id: item.get("id").and_then(as_id).unwrap_or(index as u64 + 1),
                occupied: item.get("occupied").is_some_and(truthy),
                booked: item.get("booked").is_some_and(truthy),
            })
            .collect(),
        Value::Object(summary)
            if summary.contains_key("available") || summary.contains_key("occupied") =>
        {
            let available = summary.get("available").map(as_count).unwrap_or(0);
            let occupied = summary.get("occupied").map(as_count).unwrap_or(0);
            let total = available
                .saturating_add(occupied)
                .clamp(MIN_SLOTS, MAX_SYNTHESIZED_SLOTS);

            (1..=total)
                .map(|position| DeviceSlot {
                    id: position as u64,
                    occupied: position <= occupied,
                    booked: false,
                })
                .collect()
        }
        _ => (1..=MIN_SLOTS as u64).map(DeviceSlot::free).collect(),
    }
}

/// JSON truthiness: `false`, `0`, `""` and `null` are false, everything else true
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

fn as_id(value: &Value) -> Option<u64> {
    as_number(value)
        .filter(|f| *f >= 0.0 && f.fract() == 0.0)
        .map(|f| f as u64)
}

fn as_count(value: &Value) -> usize {
    as_number(value)
        .map(|f| f.max(0.0).floor())
        .map(|f| f.min(usize::MAX as f64) as usize)
        .unwrap_or(0)
}
