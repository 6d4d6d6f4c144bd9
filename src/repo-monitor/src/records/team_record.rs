//! Normalized per-team report row.

use super::status::RecordStatus;
use crate::config::TeamConfig;
use crate::fetcher::{CommitInfo, RepoMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the monitoring report.
///
/// Field order is the report's column order. `status` is
/// [`RecordStatus::Success`] exactly when `created_at` and `is_fork` are both
/// set; `latest_commit_date` may still be empty for a repository without
/// commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    /// Team display name.
    #[serde(rename = "Team Name")]
    pub team_name: String,

    /// Repository locator as configured.
    #[serde(rename = "Repository URL")]
    pub repository_url: String,

    /// Collection outcome.
    #[serde(rename = "Status")]
    pub status: RecordStatus,

    /// Repository creation time.
    #[serde(rename = "Created At")]
    pub created_at: Option<DateTime<Utc>>,

    /// Fork flag.
    #[serde(rename = "Is Fork")]
    pub is_fork: Option<bool>,

    /// Authoring time of the most recent commit.
    #[serde(rename = "Latest Commit Date")]
    pub latest_commit_date: Option<DateTime<Utc>>,
}

impl TeamRecord {
    /// Builds a record with every data field empty.
    pub fn failed(team: &TeamConfig, status: RecordStatus) -> Self {
        Self {
            team_name: team.team_name.clone(),
            repository_url: team.repo_url.clone(),
            status,
            created_at: None,
            is_fork: None,
            latest_commit_date: None,
        }
    }

    /// Builds a successful record.
    pub fn success(
        team: &TeamConfig,
        created_at: DateTime<Utc>,
        is_fork: bool,
        latest_commit: Option<CommitInfo>,
    ) -> Self {
        Self {
            team_name: team.team_name.clone(),
            repository_url: team.repo_url.clone(),
            status: RecordStatus::Success,
            created_at: Some(created_at),
            is_fork: Some(is_fork),
            latest_commit_date: latest_commit.and_then(|c| c.author_date),
        }
    }

    /// Returns true if the record status agrees with its populated fields.
    pub fn is_consistent(&self) -> bool {
        let populated = self.created_at.is_some() && self.is_fork.is_some();
        (self.status == RecordStatus::Success) == populated
    }
}

/// Extracts the fields a successful record needs from repository metadata.
pub(crate) fn required_fields(metadata: &RepoMetadata) -> Option<(DateTime<Utc>, bool)> {
    Some((metadata.created_at?, metadata.is_fork?))
}
