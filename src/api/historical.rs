//! Historical Data endpoint — daily, weekly and monthly series.

use chrono::{Months, NaiveDate};

use crate::client::InvestingClient;
use crate::constants::{DATE_FORMAT, HISTORICAL_PATH, MAX_RANGE_YEARS};
use crate::error::{Error, Result};
use crate::types::historical::*;

impl InvestingClient {
    /// Retrieve the price series of an instrument.
    ///
    /// Rows come back in whatever order the API sends them. An empty or
    /// `null` data set is returned as an empty list.
    ///
    /// **Endpoint:** `GET /api/financialdata/historical/{id}`
    pub async fn get_historical(
        &self,
        instrument_id: i64,
        req: &HistoricalDataRequest,
    ) -> Result<Vec<HistoricalRow>> {
        let path = format!("{HISTORICAL_PATH}/{instrument_id}");
        let resp: HistoricalDataResponse = self.get_query(&path, req).await?;
        Ok(resp.data.unwrap_or_default())
    }
}

/// Parse a `dd/mm/yyyy` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        Error::InvalidArgument(format!("date {value:?} is not in dd/mm/yyyy format"))
    })
}

/// Parse both bounds of a range; the start must fall strictly before the end.
pub fn parse_range(from_date: &str, to_date: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start = parse_date(from_date)?;
    let end = parse_date(to_date)?;
    if start >= end {
        return Err(Error::InvalidArgument(format!(
            "start date {from_date} must be before end date {to_date}"
        )));
    }
    Ok((start, end))
}

/// Split `start..=end` into consecutive windows of at most
/// [`MAX_RANGE_YEARS`] years.
///
/// Windows do not overlap: each one starts the day after the previous one
/// ends, and the last one ends on `end`.
pub fn split_range(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut from = start;
    while from <= end {
        let to = from
            .checked_add_months(Months::new(MAX_RANGE_YEARS * 12))
            .map_or(end, |d| d.min(end));
        windows.push((from, to));
        match to.succ_opt() {
            Some(next) => from = next,
            None => break,
        }
    }
    windows
}
