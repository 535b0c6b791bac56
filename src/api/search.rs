//! Instrument search and index resolution.

use crate::client::InvestingClient;
use crate::constants::SEARCH_PATH;
use crate::error::{Error, Result};
use crate::types::search::{SearchQuote, SearchResponse};

impl InvestingClient {
    /// Search instruments by free text.
    ///
    /// **Endpoint:** `GET /api/search/v2/search?q=<query>`
    pub async fn search(&self, query: &str) -> Result<Vec<SearchQuote>> {
        let resp: SearchResponse = self.get_query(SEARCH_PATH, &[("q", query)]).await?;
        Ok(resp.quotes)
    }

    /// Find the index called `name` in `country`.
    ///
    /// Returns [`Error::InvalidArgument`] for an empty name or country, and
    /// [`Error::UnknownIndex`] when the search has no index of that name
    /// listed for the country.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use dse_history::client::InvestingClient;
    /// # #[tokio::main]
    /// # async fn main() -> dse_history::error::Result<()> {
    /// let client = InvestingClient::new()?;
    /// let quote = client.resolve_index("DSE 30", "Bangladesh").await?;
    /// println!("{} ({}) -> {}", quote.description, quote.symbol, quote.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve_index(&self, name: &str, country: &str) -> Result<SearchQuote> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidArgument("index name is empty".into()));
        }
        let country = country.trim();
        if country.is_empty() {
            return Err(Error::InvalidArgument("country is empty".into()));
        }

        let quotes = self.search(name).await?;
        tracing::debug!(index = name, matches = quotes.len(), "search results");

        quotes
            .into_iter()
            .find(|q| q.is_index(name, country))
            .ok_or_else(|| Error::UnknownIndex {
                index: name.to_owned(),
                country: country.to_owned(),
            })
    }
}
