//! Application state management

use std::sync::Arc;

use tracing::info;

use crate::app::options::AppOptions;
use crate::commands::dispatcher::CommandDispatcher;
use crate::commands::notice::NoticeBoard;
use crate::errors::DashboardError;
use crate::http::client::HttpClient;
use crate::refresh::panel::PanelStore;
use crate::refresh::refresher::{Binders, Refresher};
use crate::view::binder::FormBinder;

/// Route prefix of operator actions
pub const ACTIONS_PREFIX: &str = "/actions";

/// Main application state
pub struct AppState {
    /// HTTP client for backend communication
    pub http_client: Arc<HttpClient>,

    /// Latest rendered panels
    pub panels: Arc<PanelStore>,

    /// Notices awaiting display
    pub notices: Arc<NoticeBoard>,

    /// Panel refresher
    pub refresher: Arc<Refresher>,

    /// Operator command dispatcher
    pub dispatcher: Arc<CommandDispatcher>,
}

impl AppState {
    /// Initialize application state
    pub fn init(options: &AppOptions) -> Result<Self, DashboardError> {
        info!("Initializing application state...");

        let http_client = Arc::new(HttpClient::new(&options.backend)?);
        Ok(Self::with_client(http_client, options))
    }

    /// Build the state around an existing client
    pub fn with_client(http_client: Arc<HttpClient>, options: &AppOptions) -> Self {
        let panels = Arc::new(PanelStore::new());
        let notices = Arc::new(NoticeBoard::new());

        let binders = Binders {
            devices: Arc::new(FormBinder::new(ACTIONS_PREFIX, "/")),
            bookings: Arc::new(FormBinder::new(ACTIONS_PREFIX, "/bookings")),
        };
        let refresher = Arc::new(Refresher::new(
            http_client.clone(),
            panels.clone(),
            binders,
            options.view_mode,
        ));

        let dispatcher = Arc::new(CommandDispatcher::with_backend(
            http_client.clone(),
            refresher.clone(),
            notices.clone(),
        ));

        Self {
            http_client,
            panels,
            notices,
            refresher,
            dispatcher,
        }
    }
}
