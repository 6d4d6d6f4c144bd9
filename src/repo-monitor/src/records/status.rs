//! Record status types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of collecting one team's repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordStatus {
    /// Repository metadata was fetched.
    #[serde(rename = "Success")]
    Success,

    /// The repository lookup failed.
    #[serde(rename = "Error fetching repo")]
    FetchError,

    /// The repository locator has no owner/name pair.
    #[serde(rename = "Invalid URL format")]
    InvalidUrl,
}

impl RecordStatus {
    /// Returns the label written to the report.
    pub fn as_str(self) -> &'static str {
        match self {
            RecordStatus::Success => "Success",
            RecordStatus::FetchError => "Error fetching repo",
            RecordStatus::InvalidUrl => "Invalid URL format",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
