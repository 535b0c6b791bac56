#![allow(missing_docs)]
//! Instrument search types.

use serde::Deserialize;

/// Response from `GET /api/search/v2/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub quotes: Vec<SearchQuote>,
}

/// A single instrument match.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuote {
    /// Instrument id used by the historical endpoint.
    pub id: i64,
    #[serde(default)]
    pub url: String,
    /// Full instrument name (e.g. "DSE Broad").
    pub description: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub exchange: String,
    /// Country name of the listing.
    #[serde(default)]
    pub flag: String,
    /// Instrument kind, e.g. "Index - Bangladesh".
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl SearchQuote {
    /// Whether this quote is the index `name` listed in `country`.
    ///
    /// Names and countries compare case-insensitively; the name may match
    /// either the description or the ticker symbol. An empty country matches
    /// nothing.
    pub fn is_index(&self, name: &str, country: &str) -> bool {
        if country.is_empty() {
            return false;
        }
        let kind = self.kind.to_ascii_lowercase();
        let country = country.to_ascii_lowercase();

        let is_index = kind.starts_with("index");
        let in_country =
            self.flag.eq_ignore_ascii_case(&country) || kind.ends_with(country.as_str());
        let named = self.description.eq_ignore_ascii_case(name)
            || self.symbol.eq_ignore_ascii_case(name);

        is_index && in_country && named
    }
}

