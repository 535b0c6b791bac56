//! Print the historical series of a DSE index, newest first.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin index_hist --features cli -- 01/01/2024 31/03/2024
//! cargo run --bin index_hist --features cli -- 01/01/2024 31/03/2024 --index "DSE 30" --json
//! ```
//!
//! Set `RUST_LOG=debug` to see the outgoing requests.

use std::time::Duration;

use clap::Parser;
use dse_history::constants::{API_BASE_URL, DEFAULT_INDEX, DEFAULT_TIMEOUT_SECS};
use dse_history::types::Interval;
use dse_history::{HistoricalIndexFetcher, InvestingClient};

#[derive(Debug, Parser)]
#[command(name = "index_hist", about = "Historical DSE index prices, newest first")]
struct Args {
    /// First day of the range (dd/mm/yyyy).
    start_date: String,

    /// Last day of the range (dd/mm/yyyy).
    end_date: String,

    /// Index name as listed by the provider.
    #[arg(long, default_value = DEFAULT_INDEX)]
    index: String,

    /// Series interval: daily, weekly or monthly.
    #[arg(long, default_value = "daily")]
    interval: Interval,

    /// Data API base URL.
    #[arg(long, env = "INVESTING_BASE_URL", default_value = API_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print the table as JSON instead of aligned text.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> dse_history::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = InvestingClient::with_timeout(&args.base_url, Duration::from_secs(args.timeout))?
        .with_interval(args.interval);
    let fetcher = HistoricalIndexFetcher::new(client);

    let table = fetcher
        .fetch(&args.start_date, &args.end_date, Some(&args.index))
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }

    println!(
        "{:<10}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}  {:>8}",
        "Date", "Open", "High", "Low", "Close", "Volume", "Chg %"
    );
    for r in &table {
        let volume = r.volume.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
        let change = r
            .change_percent
            .map(|c| format!("{c:.2}"))
            .unwrap_or_else(|| "-".into());
        println!(
            "{:<10}  {:>12.2}  {:>12.2}  {:>12.2}  {:>12.2}  {:>14}  {:>8}",
            r.date, r.open, r.high, r.low, r.close, volume, change
        );
    }
    tracing::info!(index = %args.index, rows = table.len(), "done");

    Ok(())
}
