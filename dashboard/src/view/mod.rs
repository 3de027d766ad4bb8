//! HTML renderers
//!
//! Every renderer is a pure, total function from a backend record to an HTML
//! fragment. Markup lives in askama templates under `templates/`. Values coming
//! from the backend always pass through [`html`] escaping before they reach a
//! template, numbers included, and templates mark those fields `|safe`.

use askama::Template;
use tracing::error;

pub mod admin;
pub mod binder;
pub mod booking;
pub mod device;
pub mod html;
pub mod layout;

/// Placeholder for a missing timestamp
pub const UNKNOWN: &str = "unknown";

/// Placeholder for a missing count or measurement
pub const MISSING: &str = "-";

/// Render a template into a fragment
///
/// Templates only interpolate prepared strings; a render failure is logged and
/// yields an empty fragment.
pub(crate) fn render<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        error!("Failed to render template: {}", e);
        String::new()
    })
}
