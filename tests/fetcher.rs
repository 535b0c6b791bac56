//! Tests for `HistoricalIndexFetcher` against in-memory providers.
//!
//! No network access: each test plugs a stub implementation of
//! `HistoricalDataProvider` into the fetcher and checks the reset-index and
//! newest-first ordering applied on top of it.

use std::sync::Mutex;

use chrono::NaiveDate;
use dse_history::HistoricalIndexFetcher;
use dse_history::provider::HistoricalDataProvider;
use dse_history::types::{DateIndexedTable, PriceFields};

/// Arguments a provider was called with.
#[derive(Debug, Clone, PartialEq)]
struct Call {
    index: String,
    country: String,
    from_date: String,
    to_date: String,
}

/// Provider returning a fixed table and recording every call.
#[derive(Default)]
struct StubProvider {
    table: DateIndexedTable,
    calls: Mutex<Vec<Call>>,
}

impl StubProvider {
    fn new(table: DateIndexedTable) -> Self {
        Self {
            table,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

impl HistoricalDataProvider for StubProvider {
    type Error = StubError;

    async fn get_index_historical_data(
        &self,
        index: &str,
        country: &str,
        from_date: &str,
        to_date: &str,
    ) -> Result<DateIndexedTable, StubError> {
        self.calls.lock().unwrap().push(Call {
            index: index.into(),
            country: country.into(),
            from_date: from_date.into(),
            to_date: to_date.into(),
        });
        Ok(self.table.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct StubError {
    kind: &'static str,
    detail: String,
}

/// Provider that always fails with the given error.
struct FailingProvider(StubError);

impl HistoricalDataProvider for FailingProvider {
    type Error = StubError;

    async fn get_index_historical_data(
        &self,
        _index: &str,
        _country: &str,
        _from_date: &str,
        _to_date: &str,
    ) -> Result<DateIndexedTable, StubError> {
        Err(self.0.clone())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fields(close: f64) -> PriceFields {
    PriceFields {
        open: close - 5.0,
        high: close + 10.0,
        low: close - 12.0,
        close,
        volume: Some(1_000_000),
        change_percent: Some(0.25),
    }
}

/// Rows in ascending order, as the provider usually returns them.
fn january_table() -> DateIndexedTable {
    [
        (date(2024, 1, 2), fields(6_250.0)),
        (date(2024, 1, 3), fields(6_262.5)),
        (date(2024, 1, 4), fields(6_241.0)),
        (date(2024, 1, 7), fields(6_270.3)),
        (date(2024, 1, 8), fields(6_281.9)),
    ]
    .into_iter()
    .collect()
}

// ===================================================================
// Ordering
// ===================================================================

#[tokio::test]
async fn test_rows_sorted_newest_first() {
    let fetcher = HistoricalIndexFetcher::new(StubProvider::new(january_table()));

    let table = fetcher
        .fetch("01/01/2024", "10/01/2024", None)
        .await
        .expect("stub never fails");

    assert_eq!(table.len(), 5);
    let dates: Vec<_> = table.iter().map(|r| r.date).collect();
    assert!(dates.windows(2).all(|w| w[0] >= w[1]), "dates: {dates:?}");
    assert_eq!(table.latest().unwrap().date, date(2024, 1, 8));
    assert_eq!(table.earliest().unwrap().date, date(2024, 1, 2));
}

#[tokio::test]
async fn test_unordered_rows_are_sorted() {
    let shuffled: DateIndexedTable = [
        (date(2023, 12, 28), fields(6_200.0)),
        (date(2024, 1, 4), fields(6_241.0)),
        (date(2023, 11, 30), fields(6_150.0)),
        (date(2024, 1, 2), fields(6_250.0)),
    ]
    .into_iter()
    .collect();
    let fetcher = HistoricalIndexFetcher::new(StubProvider::new(shuffled));

    let table = fetcher.fetch_default("01/11/2023", "10/01/2024").await.unwrap();

    let dates: Vec<_> = table.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 1, 4),
            date(2024, 1, 2),
            date(2023, 12, 28),
            date(2023, 11, 30),
        ]
    );
}

#[tokio::test]
async fn test_same_rows_after_sorting() {
    let source = january_table();
    let fetcher = HistoricalIndexFetcher::new(StubProvider::new(source.clone()));

    let table = fetcher.fetch_default("01/01/2024", "10/01/2024").await.unwrap();

    assert_eq!(table.len(), source.len());
    for (d, f) in source.index().iter().zip(source.rows()) {
        let record = table
            .iter()
            .find(|r| r.date == *d)
            .unwrap_or_else(|| panic!("missing row for {d}"));
        assert_eq!(&record.price_fields(), f);
    }
}

// ===================================================================
// Reset index
// ===================================================================

#[tokio::test]
async fn test_date_exposed_as_field() {
    let fetcher = HistoricalIndexFetcher::new(StubProvider::new(january_table()));

    let table = fetcher.fetch_default("01/01/2024", "10/01/2024").await.unwrap();
    let json = serde_json::to_value(&table).unwrap();

    let rows = json.as_array().expect("table serializes as a list");
    assert_eq!(rows.len(), 5);
    for row in rows {
        assert!(row.get("date").is_some(), "row without date: {row}");
    }
    assert_eq!(rows[0]["date"], "2024-01-08");
    assert_eq!(rows[0]["close"], 6_281.9);
}

#[tokio::test]
async fn test_single_row_unchanged() {
    let only = fields(6_300.0);
    let table: DateIndexedTable = [(date(2024, 2, 1), only.clone())].into_iter().collect();
    let fetcher = HistoricalIndexFetcher::new(StubProvider::new(table));

    let result = fetcher.fetch_default("01/02/2024", "02/02/2024").await.unwrap();

    assert_eq!(result.len(), 1);
    let record = result.latest().unwrap();
    assert_eq!(record.date, date(2024, 2, 1));
    assert_eq!(record.price_fields(), only);
}

#[tokio::test]
async fn test_empty_table_is_not_an_error() {
    let fetcher = HistoricalIndexFetcher::new(StubProvider::new(DateIndexedTable::new()));

    let result = fetcher.fetch_default("01/02/2024", "02/02/2024").await.unwrap();

    assert!(result.is_empty());
    assert!(result.latest().is_none());
}

// ===================================================================
// Provider arguments
// ===================================================================

#[tokio::test]
async fn test_default_index_matches_explicit_dse_broad() {
    let provider = StubProvider::new(january_table());
    let fetcher = HistoricalIndexFetcher::new(&provider);

    let implicit = fetcher.fetch_default("01/01/2024", "10/01/2024").await.unwrap();
    let explicit = fetcher
        .fetch("01/01/2024", "10/01/2024", Some("DSE Broad"))
        .await
        .unwrap();

    assert_eq!(implicit, explicit);
    let calls = provider.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(
        calls[0],
        Call {
            index: "DSE Broad".into(),
            country: "Bangladesh".into(),
            from_date: "01/01/2024".into(),
            to_date: "10/01/2024".into(),
        }
    );
}

#[tokio::test]
async fn test_custom_index_and_dates_passed_through() {
    let provider = StubProvider::new(january_table());
    let fetcher = HistoricalIndexFetcher::new(&provider);

    // Not a valid date; the fetcher leaves that to the provider.
    fetcher
        .fetch("2024-01-01", "31/01/2024", Some("DSE 30"))
        .await
        .unwrap();

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].index, "DSE 30");
    assert_eq!(calls[0].country, "Bangladesh");
    assert_eq!(calls[0].from_date, "2024-01-01");
    assert_eq!(calls[0].to_date, "31/01/2024");
}

// ===================================================================
// Errors
// ===================================================================

#[tokio::test]
async fn test_provider_error_propagates_unchanged() {
    let expected = StubError {
        kind: "unknown index",
        detail: "no index named DSE Nope in Bangladesh".into(),
    };
    let fetcher = HistoricalIndexFetcher::new(FailingProvider(expected.clone()));

    let err = fetcher
        .fetch("01/01/2024", "10/01/2024", Some("DSE Nope"))
        .await
        .unwrap_err();

    assert_eq!(err, expected);
}
