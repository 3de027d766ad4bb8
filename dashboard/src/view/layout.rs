//! Page layout
//!
//! Shells that stitch panel fragments and operator notices into full pages.

use askama::Template;

use crate::commands::notice::{Notice, NoticeLevel};
use crate::refresh::panel::{Panel, PanelId, PanelState};
use crate::view::html::escape;
use crate::view::render;

#[derive(Template)]
#[template(path = "error_block.html")]
struct ErrorBlock {
    detail: String,
}

#[derive(Template)]
#[template(path = "status_line.html")]
struct StatusLine {
    id: &'static str,
    state: &'static str,
    status: String,
}

#[derive(Template)]
#[template(path = "panel.html")]
struct PanelSection<'a> {
    id: &'static str,
    title: &'static str,
    status: String,
    content: &'a str,
}

/// A table of pre-rendered rows, or a muted line when there are none
#[derive(Template)]
#[template(path = "table.html")]
pub(crate) struct Table {
    pub(crate) class: &'static str,
    pub(crate) headers: Vec<&'static str>,
    pub(crate) rows: Vec<String>,
    pub(crate) empty: &'static str,
}

struct NoticeView {
    level: &'static str,
    role: &'static str,
    message: String,
    at: String,
}

#[derive(Template)]
#[template(path = "notices.html")]
struct NoticeBanner {
    notices: Vec<NoticeView>,
}

#[derive(Template)]
#[template(path = "page.html")]
struct Page<'a> {
    title: String,
    refresh: u64,
    notices: String,
    body: &'a str,
}

/// Inline block carrying the full error detail
pub fn error_block(detail: &str) -> String {
    render(&ErrorBlock {
        detail: escape(detail),
    })
}

/// Status indicator for a panel
pub fn status_line(id: PanelId, panel: &Panel) -> String {
    render(&StatusLine {
        id: id.as_str(),
        state: panel.state.as_str(),
        status: escape(&panel.status),
    })
}

/// A panel section; hidden panels render nothing
pub fn panel_section(id: PanelId, panel: &Panel) -> String {
    if panel.state == PanelState::Hidden {
        return String::new();
    }
    render(&PanelSection {
        id: id.as_str(),
        title: id.title(),
        status: status_line(id, panel),
        content: &panel.content,
    })
}

/// Banner with the notices queued since the last page load
pub fn notice_banner(notices: &[Notice]) -> String {
    let notices = notices
        .iter()
        .map(|n| NoticeView {
            level: n.level.as_str(),
            role: match n.level {
                NoticeLevel::Error => "alert",
                NoticeLevel::Info => "status",
            },
            message: escape(&n.message),
            at: n.at.format("%H:%M:%S").to_string(),
        })
        .collect();
    render(&NoticeBanner { notices })
}

/// Full HTML page
///
/// The page reloads itself every `refresh_secs`, which picks up the panels'
/// latest fragments.
pub fn page(title: &str, refresh_secs: u64, notices: &[Notice], body: &str) -> String {
    render(&Page {
        title: escape(title),
        refresh: refresh_secs.max(1),
        notices: notice_banner(notices),
        body,
    })
}
