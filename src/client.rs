//! Core HTTP client for the Investing.com data API.
//!
//! The [`InvestingClient`] struct wraps [`reqwest::Client`] with the headers
//! the API expects and provides a typed `get_query` helper. Endpoint methods
//! are added to `InvestingClient` via `impl` blocks in the [`crate::api`]
//! module, and the
//! [`HistoricalDataProvider`](crate::provider::HistoricalDataProvider)
//! implementation lives in [`crate::provider`].

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{API_BASE_URL, DEFAULT_TIMEOUT_SECS, DOMAIN_ID, USER_AGENT};
use crate::error::{ApiErrorBody, Error, Result};
use crate::types::enums::Interval;

/// Core HTTP client for the Investing.com data API.
///
/// # Example
///
/// ```no_run
/// use dse_history::client::InvestingClient;
///
/// # #[tokio::main]
/// # async fn main() -> dse_history::error::Result<()> {
/// let client = InvestingClient::new()?;
/// let dsex = client.resolve_index("DSE Broad", "Bangladesh").await?;
/// println!("DSE Broad has id {}", dsex.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InvestingClient {
    http: reqwest::Client,
    /// Base URL for REST requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    /// Series interval used by the provider implementation.
    interval: Interval,
}

impl InvestingClient {
    /// Create a client for the public API with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            interval: Interval::default(),
        })
    }

    /// Use `interval` for series fetched through the provider trait.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the configured series interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request with a query string and deserialize the response.
    pub async fn get_query<Q: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self.http.get(&url).query(query).send().await?;

        self.handle_response(resp).await
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
        headers.insert("domain-id", HeaderValue::from_static(DOMAIN_ID));
        headers
    }

    /// Read a response, returning either the deserialized body or an [`Error`].
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(Error::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(self.parse_error_body(status, &body))
        }
    }

    /// Try to parse the API's JSON error structure; fall back to a raw HTTP
    /// status error.
    pub(crate) fn parse_error_body(&self, status: reqwest::StatusCode, body: &str) -> Error {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.code.is_some() || api_err.message.is_some() {
                return Error::Api(api_err);
            }
        }
        Error::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}
