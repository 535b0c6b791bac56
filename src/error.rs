//! Error types for the `dse-history` crate.
//!
//! Errors raised by the HTTP provider are collected in [`Error`]. The
//! [`HistoricalIndexFetcher`](crate::fetcher::HistoricalIndexFetcher) has no
//! error type of its own: it hands back whatever its provider returned.
//!
//! [`Error`] covers:
//! - **API errors** — Structured error bodies returned by the data API
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **Invalid arguments** — Malformed dates or a reversed date range
//! - **Unknown index** — No index of that name listed for the country
//! - **No data** — The range holds no trading days

use std::fmt;

/// Error body returned by the data API on a rejected request.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    /// Provider error code, when present.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub message: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.code.as_deref().unwrap_or("UNKNOWN"),
            self.message.as_deref().unwrap_or("No message"),
        )
    }
}

/// All possible errors produced by [`InvestingClient`](crate::client::InvestingClient).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error response returned by the data API.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No index with this name is listed for the country.
    #[error("Unknown index {index:?} for country {country:?}")]
    UnknownIndex {
        /// The requested index name.
        index: String,
        /// The requested country.
        country: String,
    },

    /// The provider returned no rows for the requested range.
    #[error("No historical data for {index:?} between {from_date} and {to_date}")]
    NoData {
        /// The requested index name.
        index: String,
        /// Start of the requested range (`dd/mm/yyyy`).
        from_date: String,
        /// End of the requested range (`dd/mm/yyyy`).
        to_date: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
