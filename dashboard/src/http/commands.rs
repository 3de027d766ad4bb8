//! Gate command API client
//!
//! The device dashboard addresses a gate through query parameters; the booking
//! page talks to the caller's own site and sends the flag in the body instead.

use backend_api::models::ExitApproval;
use serde_json::Value;
use url::form_urlencoded;

use crate::errors::DashboardError;
use crate::http::client::HttpClient;

const OPEN_GATE: &str = "/api/cmd/open-gate";
const EXIT_APPROVED: &str = "/api/cmd/exit-approved";

impl HttpClient {
    /// Open the entrance gate
    pub async fn open_gate(&self, device_id: Option<&str>) -> Result<Value, DashboardError> {
        match device_id {
            Some(device_id) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("deviceId", device_id)
                    .finish();
                self.post_empty(&format!("{OPEN_GATE}?{query}")).await
            }
            None => self.post_empty(OPEN_GATE).await,
        }
    }

    /// Set or revoke the exit-approval flag
    pub async fn set_exit_approved(
        &self,
        device_id: Option<&str>,
        approved: bool,
    ) -> Result<Value, DashboardError> {
        match device_id {
            Some(device_id) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("deviceId", device_id)
                    .append_pair("approved", if approved { "true" } else { "false" })
                    .finish();
                self.post_empty(&format!("{EXIT_APPROVED}?{query}")).await
            }
            None => {
                self.post_json(EXIT_APPROVED, &ExitApproval { approved })
                    .await
            }
        }
    }
}
