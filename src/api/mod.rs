//! REST API endpoint implementations.
//!
//! Each sub-module adds `async` methods to
//! [`InvestingClient`](crate::client::InvestingClient) via `impl` blocks.
//!
//! | Module | Endpoint | Description |
//! |---|---|---|
//! | [`search`] | `GET /api/search/v2/search` | Instrument search, index resolution |
//! | [`historical`] | `GET /api/financialdata/historical/{id}` | Price series |

pub mod historical;
pub mod search;
