//! Request, response and table types.
//!
//! ## Organization
//!
//! - [`enums`] — Shared enumerations (series interval)
//! - [`search`] — Instrument search response types
//! - [`historical`] — Historical series request/response wire types
//! - [`table`] — Date-indexed provider table and the newest-first result table
//!
//! All enums and table types are re-exported at the module root.

pub mod enums;
pub mod historical;
pub mod search;
pub mod table;

pub use enums::*;
pub use table::*;
