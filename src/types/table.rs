//! Tabular history types.
//!
//! A provider hands back a [`DateIndexedTable`]: the trading date is the row
//! key, not part of the row. Resetting the index turns every `(date, fields)`
//! pair into a [`HistoricalRecord`] with the date as a named field, and a
//! [`ResultTable`] keeps those records ordered newest-first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Provider table
// ---------------------------------------------------------------------------

/// Per-row price values as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFields {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Traded volume; indices often report none.
    pub volume: Option<u64>,
    /// Close-to-close change in percent.
    pub change_percent: Option<f64>,
}

/// A date-keyed table of price rows.
///
/// `index[i]` is the date of `rows[i]`. Rows keep the provider's order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateIndexedTable {
    index: Vec<NaiveDate>,
    rows: Vec<PriceFields>,
}

impl DateIndexedTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row keyed by `date`.
    pub fn push(&mut self, date: NaiveDate, fields: PriceFields) {
        self.index.push(date);
        self.rows.push(fields);
    }

    /// The date index.
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// The rows, without their dates.
    pub fn rows(&self) -> &[PriceFields] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Promote the date index to a column, keeping row order.
    pub fn reset_index(self) -> Vec<HistoricalRecord> {
        self.index
            .into_iter()
            .zip(self.rows)
            .map(|(date, fields)| HistoricalRecord::new(date, fields))
            .collect()
    }
}

impl FromIterator<(NaiveDate, PriceFields)> for DateIndexedTable {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, PriceFields)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (date, fields) in iter {
            table.push(date, fields);
        }
        table
    }
}

// ---------------------------------------------------------------------------
// Result table
// ---------------------------------------------------------------------------

/// One trading date with its prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
    pub change_percent: Option<f64>,
}

impl HistoricalRecord {
    /// Combine a row key and its values into one record.
    pub fn new(date: NaiveDate, fields: PriceFields) -> Self {
        Self {
            date,
            open: fields.open,
            high: fields.high,
            low: fields.low,
            close: fields.close,
            volume: fields.volume,
            change_percent: fields.change_percent,
        }
    }

    /// The record's values without its date.
    pub fn price_fields(&self) -> PriceFields {
        PriceFields {
            open: self.open,
            high: self.high,
            low: self.low,
            close: self.close,
            volume: self.volume,
            change_percent: self.change_percent,
        }
    }
}

/// Historical records ordered by date, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    records: Vec<HistoricalRecord>,
}

impl ResultTable {
    /// Build a table from records in any order.
    ///
    /// The sort is stable, so rows sharing a date keep their relative order.
    pub fn new(mut records: Vec<HistoricalRecord>) -> Self {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Self { records }
    }

    /// The records, newest first.
    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    /// Iterate over the records, newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoricalRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&HistoricalRecord> {
        self.records.first()
    }

    /// The oldest record.
    pub fn earliest(&self) -> Option<&HistoricalRecord> {
        self.records.last()
    }

    /// Consume the table, returning the records newest first.
    pub fn into_records(self) -> Vec<HistoricalRecord> {
        self.records
    }
}

impl IntoIterator for ResultTable {
    type Item = HistoricalRecord;
    type IntoIter = std::vec::IntoIter<HistoricalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a HistoricalRecord;
    type IntoIter = std::slice::Iter<'a, HistoricalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
