//! Device API client

use backend_api::models::Device;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// List device snapshots, most recently seen first
    pub async fn list_devices(&self) -> Result<Vec<Device>, DashboardError> {
        self.get_json("/api/devices").await
    }
}
