//! Slot API client

use backend_api::models::SlotsView;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

impl HttpClient {
    /// Get the slot snapshot together with the caller's role
    pub async fn get_slots(&self) -> Result<SlotsView, DashboardError> {
        self.get_json("/api/slots").await
    }
}
