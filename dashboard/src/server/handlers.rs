//! HTTP request handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::commands::action::{Action, ActionKind};
use crate::commands::notice::Notice;
use crate::refresh::panel::PanelId;
use crate::server::state::ServerState;
use crate::utils::version_info;
use crate::view::layout::{page, panel_section};

/// Form field naming the page to go back to after an action
pub const RETURN_TO_FIELD: &str = "returnTo";

/// Panels shown on the booking page, in display order
const BOOKING_PANELS: [PanelId; 4] = [
    PanelId::Slots,
    PanelId::MyBookings,
    PanelId::AdminUsers,
    PanelId::AdminBookings,
];

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    let version = version_info();
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "slotwatch".to_string(),
        version: version.version,
    })
}

/// Version response
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub git_hash: String,
    pub build_time: String,
}

/// Version handler
pub async fn version_handler() -> impl IntoResponse {
    let version = version_info();
    Json(VersionResponse {
        version: version.version,
        git_hash: version.git_hash,
        build_time: version.build_time,
    })
}

/// Device dashboard page
pub async fn devices_page_handler(State(state): State<Arc<ServerState>>) -> Response {
    if !state.mode.shows_devices() {
        return Redirect::to("/bookings").into_response();
    }

    let body = panel_section(PanelId::Devices, &state.panels.get(PanelId::Devices));
    let notices = state.notices.drain();
    Html(page("Device Dashboard", state.refresh_secs(), &notices, &body)).into_response()
}

/// Booking page
pub async fn bookings_page_handler(State(state): State<Arc<ServerState>>) -> Response {
    if !state.mode.shows_bookings() {
        return Redirect::to("/").into_response();
    }

    let body: String = BOOKING_PANELS
        .iter()
        .map(|id| panel_section(*id, &state.panels.get(*id)))
        .collect();
    let notices = state.notices.drain();
    Html(page("Parking Bookings", state.refresh_secs(), &notices, &body)).into_response()
}

/// A single panel fragment
pub async fn panel_handler(
    State(state): State<Arc<ServerState>>,
    Path(panel): Path<String>,
) -> Result<Html<String>, StatusCode> {
    let id: PanelId = panel.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    Ok(Html(panel_section(id, &state.panels.get(id))))
}

/// Perform an operator action posted by a rendered control
///
/// Whatever the outcome, the operator is sent back to the page the control
/// was on; failures show up there as notices. Posts from another site's page
/// are refused with 403 before anything reaches the backend.
pub async fn action_handler(
    State(state): State<Arc<ServerState>>,
    Path(action): Path<String>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    if is_cross_site(&headers) {
        warn!(
            "Rejected cross-site post to /actions/{} from {:?}",
            action,
            headers.get(header::ORIGIN)
        );
        return (StatusCode::FORBIDDEN, "cross-site action rejected").into_response();
    }

    let kind: ActionKind = match action.parse() {
        Ok(kind) => kind,
        Err(e) => {
            warn!("Rejected action post: {}", e);
            return (StatusCode::NOT_FOUND, e.to_string()).into_response();
        }
    };

    let action = match Action::from_form(kind, &fields) {
        Ok(action) => action,
        Err(e) => {
            warn!("Rejected {} form: {}", kind, e);
            state
                .notices
                .push(Notice::error(format!("{} failed: {}", kind.label(), e)));
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    // failures are already logged and queued as notices
    let _ = state.dispatcher.dispatch(action).await;

    Redirect::to(&return_to(&fields)).into_response()
}

/// Whether a request was sent by a page on another site
///
/// Browsers attach `Sec-Fetch-Site` and `Origin` to form posts. A request
/// carrying neither did not come from a browser page and is let through.
pub fn is_cross_site(headers: &HeaderMap) -> bool {
    if let Some(site) = headers.get("sec-fetch-site") {
        if !matches!(site.to_str(), Ok("same-origin") | Ok("none")) {
            return true;
        }
    }

    let Some(origin) = headers.get(header::ORIGIN) else {
        return false;
    };
    let origin = origin
        .to_str()
        .ok()
        .and_then(|o| Url::parse(o).ok())
        .and_then(|url| {
            let host = url.host_str()?;
            Some(match url.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            })
        });
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());

    match (origin, host) {
        (Some(origin), Some(host)) => !origin.eq_ignore_ascii_case(host),
        _ => true,
    }
}

/// Local path to redirect to after an action; anything else falls back to `/`
pub fn return_to(fields: &HashMap<String, String>) -> String {
    match fields.get(RETURN_TO_FIELD) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.clone(),
        _ => "/".to_string(),
    }
}
