//! The historical data provider seam.
//!
//! [`HistoricalIndexFetcher`](crate::fetcher::HistoricalIndexFetcher) talks to
//! its data source only through [`HistoricalDataProvider`]. The error type is
//! the provider's own, so whatever a provider signals reaches the caller
//! untouched.

use std::future::Future;

use crate::api::historical::{parse_range, split_range};
use crate::client::InvestingClient;
use crate::error::{Error, Result};
use crate::types::historical::HistoricalDataRequest;
use crate::types::table::DateIndexedTable;

/// A source of historical index prices.
pub trait HistoricalDataProvider {
    /// Error signalled by the provider.
    type Error;

    /// Fetch the series of `index` in `country` between two `dd/mm/yyyy` dates.
    ///
    /// The returned table is keyed by trading date.
    fn get_index_historical_data(
        &self,
        index: &str,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> impl Future<Output = std::result::Result<DateIndexedTable, Self::Error>> + Send;
}

impl<P: HistoricalDataProvider + Sync> HistoricalDataProvider for &P {
    type Error = P::Error;

    fn get_index_historical_data(
        &self,
        index: &str,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> impl Future<Output = std::result::Result<DateIndexedTable, Self::Error>> + Send {
        (**self).get_index_historical_data(index, country, from_date, to_date)
    }
}

impl HistoricalDataProvider for InvestingClient {
    type Error = Error;

    /// Validates the range, resolves the index id, then downloads the series.
    /// Ranges longer than [`MAX_RANGE_YEARS`](crate::constants::MAX_RANGE_YEARS)
    /// are fetched window by window and concatenated.
    ///
    /// Fails with [`Error::InvalidArgument`] before any request when a date is
    /// malformed or the range is reversed, and with [`Error::NoData`] when the
    /// range holds no rows.
    async fn get_index_historical_data(
        &self,
        index: &str,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<DateIndexedTable> {
        let (start, end) = parse_range(from_date, to_date)?;

        let quote = self.resolve_index(index, country).await?;
        let mut rows = Vec::new();
        for (from, to) in split_range(start, end) {
            let req = HistoricalDataRequest::new(from, to, self.interval());
            rows.extend(self.get_historical(quote.id, &req).await?);
        }

        if rows.is_empty() {
            return Err(Error::NoData {
                index: index.to_owned(),
                from_date: from_date.to_owned(),
                to_date: to_date.to_owned(),
            });
        }

        tracing::debug!(index, id = quote.id, rows = rows.len(), "historical series");

        Ok(rows
            .iter()
            .map(|row| (row.date(), row.price_fields()))
            .collect())
    }
}
