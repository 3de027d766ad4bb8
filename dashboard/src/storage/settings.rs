//! Settings file management

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::logs::LogLevel;
use crate::refresh::refresher::ViewMode;

/// Default location of the settings file
pub const DEFAULT_SETTINGS_PATH: &str = "/etc/slotwatch/settings.json";

/// Dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,

    /// Also write daily-rotated log files here
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Backend configuration
    #[serde(default)]
    pub backend: BackendSettings,

    /// Local dashboard server configuration
    #[serde(default)]
    pub server: ServerSettings,

    /// Views to refresh and serve
    #[serde(default)]
    pub view_mode: ViewMode,

    /// Polling interval in milliseconds
    #[serde(default = "default_polling_interval")]
    pub polling_interval_ms: u64,
}

fn default_polling_interval() -> u64 {
    2000
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_json: false,
            log_dir: None,
            backend: BackendSettings::default(),
            server: ServerSettings::default(),
            view_mode: ViewMode::default(),
            polling_interval_ms: default_polling_interval(),
        }
    }
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Base URL of the parking backend
    #[serde(default = "default_backend_url")]
    pub base_url: String,

    /// Name of the backend's session cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session cookie value obtained by logging in to the backend
    #[serde(default)]
    pub session_cookie: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: default_backend_url(),
            cookie_name: default_cookie_name(),
            session_cookie: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Local dashboard server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
