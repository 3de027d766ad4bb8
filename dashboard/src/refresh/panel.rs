//! Panel store
//!
//! A panel is one independently refreshed region of a page. The store holds
//! the latest rendered fragment per panel; every update replaces the whole
//! panel under one write lock, so readers never see a half-written region.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::errors::DashboardError;

/// Page region identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Devices,
    Slots,
    MyBookings,
    AdminUsers,
    AdminBookings,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [
        PanelId::Devices,
        PanelId::Slots,
        PanelId::MyBookings,
        PanelId::AdminUsers,
        PanelId::AdminBookings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Devices => "devices",
            PanelId::Slots => "slots",
            PanelId::MyBookings => "my-bookings",
            PanelId::AdminUsers => "admin-users",
            PanelId::AdminBookings => "admin-bookings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelId::Devices => "Devices",
            PanelId::Slots => "Parking Slots",
            PanelId::MyBookings => "My Bookings",
            PanelId::AdminUsers => "Pending Registrations",
            PanelId::AdminBookings => "Pending Bookings",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DashboardError::ConfigError(format!("unknown panel: {s}")))
    }
}

/// Refresh state of a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Never refreshed
    Idle,
    Loading,
    Ready,
    Failed,
    /// Nothing to show for this caller (admin lists for non-admins)
    Hidden,
}

impl PanelState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Idle => "idle",
            PanelState::Loading => "loading",
            PanelState::Ready => "ready",
            PanelState::Failed => "failed",
            PanelState::Hidden => "hidden",
        }
    }
}

/// Latest rendered state of one panel
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub state: PanelState,
    /// Status indicator text
    pub status: String,
    /// Rendered HTML fragment
    pub content: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            state: PanelState::Idle,
            status: "Waiting for first refresh...".to_string(),
            content: String::new(),
            updated_at: None,
        }
    }
}

/// In-memory store of the latest panel fragments
#[derive(Default)]
pub struct PanelStore {
    panels: RwLock<HashMap<PanelId, Panel>>,
}

impl PanelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a panel, or an idle placeholder if it was never refreshed
    pub fn get(&self, id: PanelId) -> Panel {
        let panels = self.panels.read().unwrap_or_else(|e| e.into_inner());
        panels.get(&id).cloned().unwrap_or_default()
    }

    /// Show "Loading..." while keeping the previous content on screen
    ///
    /// A hidden panel stays hidden until a fetch succeeds.
    pub fn set_loading(&self, id: PanelId) {
        let mut panels = self.panels.write().unwrap_or_else(|e| e.into_inner());
        let panel = panels.entry(id).or_default();
        if panel.state != PanelState::Hidden {
            panel.state = PanelState::Loading;
        }
        panel.status = "Loading...".to_string();
    }

    /// Replace the panel with freshly rendered content
    pub fn set_ready(&self, id: PanelId, status: impl Into<String>, content: String) {
        self.replace(id, PanelState::Ready, status.into(), content);
    }

    /// Replace the panel with a failure summary and an error block
    pub fn set_failed(&self, id: PanelId, status: impl Into<String>, content: String) {
        self.replace(id, PanelState::Failed, status.into(), content);
    }

    /// Hide the panel entirely
    pub fn set_hidden(&self, id: PanelId) {
        self.replace(id, PanelState::Hidden, String::new(), String::new());
    }

    fn replace(&self, id: PanelId, state: PanelState, status: String, content: String) {
        let panel = Panel {
            state,
            status,
            content,
            updated_at: Some(Utc::now()),
        };
        let mut panels = self.panels.write().unwrap_or_else(|e| e.into_inner());
        panels.insert(id, panel);
    }
}
