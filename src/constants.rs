//! Constants for the Investing.com data API and the DSE defaults.
//!
//! These are used internally by [`InvestingClient`](crate::client::InvestingClient)
//! and [`HistoricalIndexFetcher`](crate::fetcher::HistoricalIndexFetcher), but
//! are also exported for advanced usage.

// ---------------------------------------------------------------------------
// Base URL & endpoints
// ---------------------------------------------------------------------------

/// Base URL for the Investing.com data API.
pub const API_BASE_URL: &str = "https://api.investing.com";

/// Instrument search endpoint.
pub const SEARCH_PATH: &str = "/api/search/v2/search";

/// Historical series endpoint; the instrument id is appended as a path segment.
pub const HISTORICAL_PATH: &str = "/api/financialdata/historical";

/// Value of the `domain-id` header expected by the API.
pub const DOMAIN_ID: &str = "www";

/// Browser user agent; the API rejects requests without one.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Longest span, in years, requested from the series endpoint at once.
///
/// Longer ranges are split into consecutive windows.
pub const MAX_RANGE_YEARS: u32 = 19;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// DSE defaults
// ---------------------------------------------------------------------------

/// Index fetched when the caller does not name one.
pub const DEFAULT_INDEX: &str = "DSE Broad";

/// Country every lookup is scoped to.
pub const COUNTRY: &str = "Bangladesh";

/// Date format accepted for range bounds (`dd/mm/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";
