//! Newest-first historical index prices.

use crate::constants::{COUNTRY, DEFAULT_INDEX};
use crate::provider::HistoricalDataProvider;
use crate::types::table::ResultTable;

/// Fetches a Bangladeshi index series and orders it by date, newest first.
///
/// The fetcher does no validation of its own. Dates are passed to the
/// provider as given, and any provider error is returned unchanged.
///
/// # Example
///
/// ```no_run
/// use dse_history::{HistoricalIndexFetcher, InvestingClient};
///
/// # #[tokio::main]
/// # async fn main() -> dse_history::Result<()> {
/// let fetcher = HistoricalIndexFetcher::new(InvestingClient::new()?);
/// let table = fetcher.fetch("01/01/2024", "31/03/2024", None).await?;
/// if let Some(latest) = table.latest() {
///     println!("{}: {}", latest.date, latest.close);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HistoricalIndexFetcher<P> {
    provider: P,
}

impl<P: HistoricalDataProvider> HistoricalIndexFetcher<P> {
    /// Create a fetcher over `provider`.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Fetch `index` (default [`DEFAULT_INDEX`]) between two `dd/mm/yyyy` dates.
    pub async fn fetch(
        &self,
        start_date: &str,
        end_date: &str,
        index: Option<&str>,
    ) -> Result<ResultTable, P::Error> {
        let index = index.unwrap_or(DEFAULT_INDEX);
        tracing::debug!(index, start_date, end_date, "fetching index history");

        let table = self
            .provider
            .get_index_historical_data(index, COUNTRY, start_date, end_date)
            .await?;

        Ok(ResultTable::new(table.reset_index()))
    }

    /// Fetch the [`DEFAULT_INDEX`] series between two `dd/mm/yyyy` dates.
    pub async fn fetch_default(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<ResultTable, P::Error> {
        self.fetch(start_date, end_date, None).await
    }
}
