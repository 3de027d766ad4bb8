//! Error types for the dashboard

use http::StatusCode;
use thiserror::Error;

/// Main error type for the dashboard
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The request never completed (connect, timeout, TLS, ...)
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status; `body` is the raw response text
    #[error("{method} {url} failed with HTTP {status}: {body}")]
    HttpError {
        method: &'static str,
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The backend answered 2xx but the body was not the expected JSON
    #[error("{method} {url} returned a malformed response: {preview}")]
    MalformedResponse {
        method: &'static str,
        url: String,
        preview: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Shutdown error: {0}")]
    ShutdownError(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    /// HTTP status of a failed backend response, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DashboardError::HttpError { status, .. } => Some(*status),
            DashboardError::NetworkError(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the backend refused the caller (401/403)
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Short human-readable summary for status lines
    pub fn summary(&self) -> String {
        match self {
            DashboardError::HttpError { status, .. } => format!("HTTP {}", status.as_u16()),
            DashboardError::MalformedResponse { .. } => "malformed response".to_string(),
            DashboardError::NetworkError(e) if e.is_timeout() => "request timed out".to_string(),
            DashboardError::NetworkError(_) => "backend unreachable".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<anyhow::Error> for DashboardError {
    fn from(err: anyhow::Error) -> Self {
        DashboardError::Internal(err.to_string())
    }
}
