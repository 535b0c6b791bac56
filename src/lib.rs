//! # dse-history
//!
//! Historical index prices for the Dhaka Stock Exchange, sorted newest first.
//!
//! Data comes from the Investing.com data API through [`InvestingClient`];
//! any other source can be plugged in by implementing
//! [`HistoricalDataProvider`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use dse_history::{HistoricalIndexFetcher, InvestingClient};
//!
//! #[tokio::main]
//! async fn main() -> dse_history::Result<()> {
//!     let fetcher = HistoricalIndexFetcher::new(InvestingClient::new()?);
//!     let dsex = fetcher.fetch_default("01/01/2024", "31/01/2024").await?;
//!     let dse30 = fetcher.fetch("01/01/2024", "31/01/2024", Some("DSE 30")).await?;
//!     println!("{} DSEX rows, {} DS30 rows", dsex.len(), dse30.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod provider;
pub mod types;

/// Re-export the main types at crate root for convenience.
pub use client::InvestingClient;
pub use fetcher::HistoricalIndexFetcher;
pub use provider::HistoricalDataProvider;
/// Re-export the error type and Result alias.
pub use error::{Error, Result};
