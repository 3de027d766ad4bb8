//! HTML escaping

use std::fmt::Display;

/// Escape text for HTML text and attribute context
///
/// `&` goes first so entities produced by later replacements are not re-escaped.
pub fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape any displayable value
pub fn escape_display<T: Display>(value: T) -> String {
    escape(&value.to_string())
}

/// Escape an optional value; `None` becomes the empty string
pub fn escape_opt<T: Display>(value: Option<T>) -> String {
    value.map(escape_display).unwrap_or_default()
}

/// Escape an optional value, substituting `fallback` when absent
pub fn escape_or<T: Display>(value: Option<T>, fallback: &str) -> String {
    value
        .map(escape_display)
        .unwrap_or_else(|| escape(fallback))
}
