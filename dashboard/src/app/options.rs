//! Application configuration options

use std::time::Duration;

use secrecy::SecretString;

use crate::http::client::ClientOptions;
use crate::refresh::refresher::ViewMode;
use crate::storage::settings::Settings;
use crate::workers::poller;

/// Main application options
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Backend connection
    pub backend: ClientOptions,

    /// Local dashboard server configuration
    pub server: ServerOptions,

    /// Views to refresh and serve
    pub view_mode: ViewMode,

    /// Poller worker options
    pub poller: poller::Options,

    /// Maximum delay for graceful shutdown
    pub max_shutdown_delay: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            backend: ClientOptions::default(),
            server: ServerOptions::default(),
            view_mode: ViewMode::default(),
            poller: poller::Options::default(),
            max_shutdown_delay: Duration::from_secs(10),
        }
    }
}

impl From<&Settings> for AppOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            backend: ClientOptions {
                base_url: settings.backend.base_url.clone(),
                cookie_name: settings.backend.cookie_name.clone(),
                session_cookie: settings
                    .backend
                    .session_cookie
                    .clone()
                    .map(SecretString::from),
                timeout: Duration::from_secs(settings.backend.request_timeout_secs.max(1)),
            },
            server: ServerOptions {
                host: settings.server.host.clone(),
                port: settings.server.port,
            },
            view_mode: settings.view_mode,
            poller: poller::Options {
                interval: Duration::from_millis(settings.polling_interval_ms.max(100)),
            },
            ..Default::default()
        }
    }
}

/// Local HTTP server options
#[derive(Debug, Clone)]
pub struct ServerOptions {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
