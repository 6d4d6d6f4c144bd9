//! Team entry deserialization.

use serde::{Deserialize, Serialize};

/// A single monitored team, as listed in `repos.json`.
///
/// Missing keys deserialize to empty strings. An empty `repo_url` is reported
/// as an invalid URL for that team instead of rejecting the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConfig {
    /// Display name of the team.
    #[serde(default)]
    pub team_name: String,

    /// Repository locator, e.g. `https://github.com/owner/repo`.
    #[serde(default)]
    pub repo_url: String,
}

impl TeamConfig {
    /// Creates a team entry.
    pub fn new(team_name: impl Into<String>, repo_url: impl Into<String>) -> Self {
        Self {
            team_name: team_name.into(),
            repo_url: repo_url.into(),
        }
    }
}
