#![allow(missing_docs)]
//! Historical Data types — wire request and response for the series endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::types::enums::Interval;
use crate::types::table::PriceFields;

// ---------------------------------------------------------------------------
// Historical Data Request
// ---------------------------------------------------------------------------

/// Query string for historical data.
///
/// Used by `GET /api/financialdata/historical/{id}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct HistoricalDataRequest {
    /// First day of the range (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the range (inclusive).
    pub end_date: NaiveDate,
    pub time_frame: Interval,
    /// Ask the API not to pad non-trading days.
    pub add_missing_rows: bool,
}

impl HistoricalDataRequest {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, time_frame: Interval) -> Self {
        Self {
            start_date,
            end_date,
            time_frame,
            add_missing_rows: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Historical Data Response
// ---------------------------------------------------------------------------

/// Response from `GET /api/financialdata/historical/{id}`.
///
/// `data` is `null` when the range holds no rows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoricalDataResponse {
    #[serde(default)]
    pub data: Option<Vec<HistoricalRow>>,
}

/// One row of a historical series.
///
/// Only the raw numeric fields are decoded; the API also sends display
/// strings for every value.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoricalRow {
    #[serde(rename = "rowDateTimestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "last_openRaw")]
    pub open: f64,
    #[serde(rename = "last_maxRaw")]
    pub high: f64,
    #[serde(rename = "last_minRaw")]
    pub low: f64,
    #[serde(rename = "last_closeRaw")]
    pub close: f64,
    #[serde(rename = "volumeRaw", default)]
    pub volume: Option<f64>,
    #[serde(rename = "change_precentRaw", default)]
    pub change_percent: Option<f64>,
}

impl HistoricalRow {
    /// Trading date of the row.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// The row's values without its date.
    pub fn price_fields(&self) -> PriceFields {
        PriceFields {
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume.map(|v| v.max(0.0).round() as u64),
            change_percent: self.change_percent,
        }
    }
}
