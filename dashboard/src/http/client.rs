//! HTTP client implementation

use std::sync::Arc;
use std::time::Duration;

use reqwest::cookie::Jar;
use reqwest::{header, Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::DashboardError;

/// Longest body excerpt carried by a [`DashboardError::MalformedResponse`]
pub const PREVIEW_CHARS: usize = 200;

/// Backend connection options
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Backend base URL, e.g. `http://localhost:8000`
    pub base_url: String,

    /// Name of the backend's session cookie
    pub cookie_name: String,

    /// Session cookie value to present on every request
    pub session_cookie: Option<SecretString>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            cookie_name: "session".to_string(),
            session_cookie: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for backend communication
///
/// Requests carry the session cookie and never use cached responses. The
/// session itself belongs to the backend; the client only presents it.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(options: &ClientOptions) -> Result<Self, DashboardError> {
        let base_url = options.base_url.trim_end_matches('/').to_string();
        let parsed: Url = base_url
            .parse()
            .map_err(|e| DashboardError::ConfigError(format!("invalid backend url {base_url}: {e}")))?;

        let jar = Arc::new(Jar::default());
        if let Some(session) = &options.session_cookie {
            jar.add_cookie_str(
                &format!("{}={}", options.cookie_name, session.expose_secret()),
                &parsed,
            );
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CACHE_CONTROL,
            header::HeaderValue::from_static("no-cache, no-store, max-age=0"),
        );
        headers.insert(header::PRAGMA, header::HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .cookie_provider(jar)
            .default_headers(headers)
            .timeout(options.timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the body as `T`
    ///
    /// The body is read as text before decoding so failures can quote it.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DashboardError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("HTTP GET {} failed: {} - {}", url, status, body);
            return Err(DashboardError::HttpError {
                method: "GET",
                url,
                status,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("HTTP GET {} returned malformed JSON: {}", url, e);
            DashboardError::MalformedResponse {
                method: "GET",
                url,
                preview: preview(&body),
            }
        })
    }

    /// POST `body` as JSON to `path`
    ///
    /// A successful response without a JSON body resolves to an empty object.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, DashboardError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("HTTP POST {} failed: {} - {}", url, status, text);
            return Err(DashboardError::HttpError {
                method: "POST",
                url,
                status,
                body: text,
            });
        }

        Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::Object(Map::new())))
    }

    /// POST an empty JSON object to `path`
    pub async fn post_empty(&self, path: &str) -> Result<Value, DashboardError> {
        self.post_json(path, &Map::new()).await
    }
}

/// First [`PREVIEW_CHARS`] characters of a response body
pub fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}
