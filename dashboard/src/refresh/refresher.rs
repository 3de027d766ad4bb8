//! Panel refresh routines
//!
//! One [`Refresher`] drives both views. [`ViewMode`] selects which routines a
//! refresh runs; each routine fetches, renders, and replaces its panels.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::refresh::panel::{PanelId, PanelStore};
use crate::view::binder::ActionBinder;
use crate::view::layout::error_block;
use crate::view::{admin, booking, device};

/// Which dashboard views are refreshed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Device dashboard with gate controls
    Device,
    /// Booking page with the caller's bookings and moderation lists
    Booking,
    #[default]
    Both,
}

impl ViewMode {
    pub fn shows_devices(&self) -> bool {
        matches!(self, ViewMode::Device | ViewMode::Both)
    }

    pub fn shows_bookings(&self) -> bool {
        matches!(self, ViewMode::Booking | ViewMode::Both)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Device => "device",
            ViewMode::Booking => "booking",
            ViewMode::Both => "both",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "device" | "devices" => Ok(ViewMode::Device),
            "booking" | "bookings" => Ok(ViewMode::Booking),
            "both" | "all" => Ok(ViewMode::Both),
            _ => Err(format!("Invalid view mode: {}", s)),
        }
    }
}

/// Result of a scheduled tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Completed,
    /// The previous refresh was still running
    Skipped,
}

/// Something the poller refreshes on every tick
#[async_trait]
pub trait PollTarget: Send + Sync {
    async fn tick(&self) -> TickOutcome;
}

/// Action binders for the two pages
#[derive(Clone)]
pub struct Binders {
    pub devices: Arc<dyn ActionBinder>,
    pub bookings: Arc<dyn ActionBinder>,
}

/// Refreshes panels from the backend
pub struct Refresher {
    http_client: Arc<HttpClient>,
    panels: Arc<PanelStore>,
    binders: Binders,
    mode: ViewMode,
    in_flight: Mutex<()>,
}

impl Refresher {
    pub fn new(
        http_client: Arc<HttpClient>,
        panels: Arc<PanelStore>,
        binders: Binders,
        mode: ViewMode,
    ) -> Self {
        Self {
            http_client,
            panels,
            binders,
            mode,
            in_flight: Mutex::new(()),
        }
    }

    pub fn panels(&self) -> &Arc<PanelStore> {
        &self.panels
    }

    /// Refresh now, waiting for any refresh already in flight to finish first
    pub async fn refresh_now(&self) {
        let _guard = self.in_flight.lock().await;
        self.refresh_all().await;
    }

    /// Refresh unless a refresh is already running
    pub async fn try_refresh(&self) -> TickOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("Previous refresh still running, skipping tick");
            return TickOutcome::Skipped;
        };
        self.refresh_all().await;
        TickOutcome::Completed
    }

    /// Run every routine of the configured view mode, in order
    async fn refresh_all(&self) {
        if self.mode.shows_devices() {
            self.refresh_devices().await;
        }
        if self.mode.shows_bookings() {
            self.refresh_slots().await;
            self.refresh_my_bookings().await;
            self.refresh_admin_lists().await;
        }
    }

    /// Device dashboard: one combined snapshot
    pub async fn refresh_devices(&self) {
        let id = PanelId::Devices;
        self.panels.set_loading(id);

        match self.http_client.list_devices().await {
            Ok(devices) => {
                let content = device::devices_panel(&devices, self.binders.devices.as_ref());
                self.panels.set_ready(
                    id,
                    format!("{} · {} device(s)", updated_now(), devices.len()),
                    content,
                );
            }
            Err(e) => self.fail(id, "Failed to load devices", &e),
        }
    }

    /// Booking page: slot and role snapshot
    pub async fn refresh_slots(&self) {
        let id = PanelId::Slots;
        self.panels.set_loading(id);

        match self.http_client.get_slots().await {
            Ok(view) => {
                let content = booking::slots_panel(&view, self.binders.bookings.as_ref());
                self.panels.set_ready(
                    id,
                    format!("{} · {} slot(s)", updated_now(), view.slots.len()),
                    content,
                );
            }
            Err(e) => self.fail(id, "Failed to load slots", &e),
        }
    }

    /// Booking page: the caller's own bookings
    pub async fn refresh_my_bookings(&self) {
        let id = PanelId::MyBookings;
        self.panels.set_loading(id);

        match self.http_client.my_bookings().await {
            Ok(bookings) => {
                let content =
                    booking::my_bookings_panel(&bookings, self.binders.bookings.as_ref());
                self.panels.set_ready(
                    id,
                    format!("{} · {} booking(s)", updated_now(), bookings.len()),
                    content,
                );
            }
            Err(e) => self.fail(id, "Failed to load your bookings", &e),
        }
    }

    /// Booking page: moderation lists, best effort
    ///
    /// A 401/403 means the caller is not an admin and hides the panel. Any
    /// other failure is shown in the panel like a regular refresh failure.
    pub async fn refresh_admin_lists(&self) {
        let binder = self.binders.bookings.as_ref();
        self.panels.set_loading(PanelId::AdminUsers);
        self.panels.set_loading(PanelId::AdminBookings);

        match self.http_client.pending_users().await {
            Ok(users) => self.panels.set_ready(
                PanelId::AdminUsers,
                format!("{} · {} pending", updated_now(), users.len()),
                admin::admin_users_panel(&users, binder),
            ),
            Err(e) if e.is_unauthorized() => {
                debug!("Not an admin, hiding pending users");
                self.panels.set_hidden(PanelId::AdminUsers);
            }
            Err(e) => self.fail(PanelId::AdminUsers, "Failed to load pending registrations", &e),
        }

        match self.http_client.pending_bookings().await {
            Ok(bookings) => self.panels.set_ready(
                PanelId::AdminBookings,
                format!("{} · {} pending", updated_now(), bookings.len()),
                admin::admin_bookings_panel(&bookings, binder),
            ),
            Err(e) if e.is_unauthorized() => {
                debug!("Not an admin, hiding pending bookings");
                self.panels.set_hidden(PanelId::AdminBookings);
            }
            Err(e) => self.fail(PanelId::AdminBookings, "Failed to load pending bookings", &e),
        }
    }

    fn fail(&self, id: PanelId, what: &str, e: &DashboardError) {
        error!("Refresh of panel {} failed: {}", id, e);
        self.panels.set_failed(
            id,
            format!("{}: {}", what, e.summary()),
            error_block(&format!("{e}\n\n{e:?}")),
        );
    }
}

#[async_trait]
impl PollTarget for Refresher {
    async fn tick(&self) -> TickOutcome {
        let outcome = self.try_refresh().await;
        if outcome == TickOutcome::Completed {
            debug!("Refresh tick completed");
        }
        outcome
    }
}

fn updated_now() -> String {
    format!("Updated {}", Utc::now().format("%H:%M:%S"))
}
