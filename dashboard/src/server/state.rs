//! Server state

use std::sync::Arc;
use std::time::Duration;

use crate::commands::dispatcher::CommandDispatcher;
use crate::commands::notice::NoticeBoard;
use crate::refresh::panel::PanelStore;
use crate::refresh::refresher::ViewMode;

/// Server state shared across handlers
pub struct ServerState {
    pub panels: Arc<PanelStore>,
    pub notices: Arc<NoticeBoard>,
    pub dispatcher: Arc<CommandDispatcher>,
    pub mode: ViewMode,
    pub refresh_interval: Duration,
}

impl ServerState {
    pub fn new(
        panels: Arc<PanelStore>,
        notices: Arc<NoticeBoard>,
        dispatcher: Arc<CommandDispatcher>,
        mode: ViewMode,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            panels,
            notices,
            dispatcher,
            mode,
            refresh_interval,
        }
    }

    /// Page auto-refresh period in whole seconds
    pub fn refresh_secs(&self) -> u64 {
        self.refresh_interval.as_secs().max(1)
    }
}
