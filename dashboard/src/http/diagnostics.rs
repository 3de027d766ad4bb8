//! Backend diagnostics endpoints

use serde::Deserialize;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

/// Response of `GET /api/version`
#[derive(Debug, Clone, Deserialize)]
pub struct BackendVersion {
    #[serde(default)]
    pub version: Option<String>,
}

/// Response of `GET /api/db-check`
#[derive(Debug, Clone, Deserialize)]
pub struct DbCheck {
    #[serde(default)]
    pub db: Option<String>,
}

impl HttpClient {
    /// Get the backend build version
    pub async fn backend_version(&self) -> Result<BackendVersion, DashboardError> {
        self.get_json("/api/version").await
    }

    /// Ask the backend to check its database
    pub async fn db_check(&self) -> Result<DbCheck, DashboardError> {
        self.get_json("/api/db-check").await
    }
}
