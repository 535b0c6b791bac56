//! Shared enum types that map directly to API string values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Sampling interval of a historical series (`time-frame` query value).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// One row per trading day.
    #[default]
    Daily,
    /// One row per week.
    Weekly,
    /// One row per month.
    Monthly,
}

impl Interval {
    /// Returns the wire value used in the `time-frame` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(Error::InvalidArgument(format!(
                "interval must be daily, weekly or monthly, got {other:?}"
            ))),
        }
    }
}
