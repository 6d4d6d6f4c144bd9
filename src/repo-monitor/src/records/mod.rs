//! Per-team record building.
//!
//! Each configured team is resolved, looked up and turned into exactly one
//! [`TeamRecord`]. Per-team problems never abort the run: they come back as a
//! [`TeamFailure`] and end up in the record's status.

mod status;
mod team_record;

pub use status::RecordStatus;
pub use team_record::TeamRecord;

use crate::config::TeamConfig;
use crate::fetcher::{CommitInfo, RepositorySource};
use crate::reference::parse_repo_url;
use chrono::{DateTime, Utc};
use team_record::required_fields;
use tracing::{info, info_span, warn, Instrument};

/// Why a team produced no repository data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamFailure {
    /// The locator has no owner/name pair.
    InvalidUrl,
    /// The repository lookup failed or returned incomplete attributes.
    FetchFailed,
}

impl TeamFailure {
    /// Returns the report status for this failure.
    pub fn status(self) -> RecordStatus {
        match self {
            TeamFailure::InvalidUrl => RecordStatus::InvalidUrl,
            TeamFailure::FetchFailed => RecordStatus::FetchError,
        }
    }
}

/// Repository data collected for one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    /// Repository creation time.
    pub created_at: DateTime<Utc>,
    /// Fork flag.
    pub is_fork: bool,
    /// Most recent commit, if any.
    pub latest_commit: Option<CommitInfo>,
}

/// Collects repository data for one team.
///
/// The commit lookup only runs after a successful repository lookup.
///
/// # Errors
///
/// Returns [`TeamFailure::InvalidUrl`] if the locator cannot be parsed and
/// [`TeamFailure::FetchFailed`] if the repository lookup fails.
pub async fn process_team<S: RepositorySource>(
    source: &S,
    team: &TeamConfig,
) -> Result<RepoSnapshot, TeamFailure> {
    let Some(identity) = parse_repo_url(&team.repo_url) else {
        warn!(url = %team.repo_url, "Invalid URL format");
        return Err(TeamFailure::InvalidUrl);
    };

    let Some(metadata) = source
        .fetch_repo_details(&identity.owner, &identity.name)
        .await
    else {
        warn!(repo = %identity, "Could not fetch repository data");
        return Err(TeamFailure::FetchFailed);
    };

    let Some((created_at, is_fork)) = required_fields(&metadata) else {
        warn!(repo = %identity, "Repository data is missing creation time or fork flag");
        return Err(TeamFailure::FetchFailed);
    };

    let latest_commit = source
        .fetch_latest_commit(&identity.owner, &identity.name)
        .await;
    if latest_commit.is_none() {
        info!(repo = %identity, "No commits found");
    }

    Ok(RepoSnapshot {
        created_at,
        is_fork,
        latest_commit,
    })
}

/// Converts a per-team outcome into a report row.
pub fn to_record(team: &TeamConfig, outcome: Result<RepoSnapshot, TeamFailure>) -> TeamRecord {
    match outcome {
        Ok(snapshot) => TeamRecord::success(
            team,
            snapshot.created_at,
            snapshot.is_fork,
            snapshot.latest_commit,
        ),
        Err(failure) => TeamRecord::failed(team, failure.status()),
    }
}

/// Builds the record for one team.
pub async fn build_record<S: RepositorySource>(source: &S, team: &TeamConfig) -> TeamRecord {
    let span = info_span!("team", team = %team.team_name);

    async {
        info!(url = %team.repo_url, "Processing team");
        to_record(team, process_team(source, team).await)
    }
    .instrument(span)
    .await
}

/// Builds one record per team, in configuration order.
///
/// Teams are processed one at a time; each finishes both lookups before the
/// next starts.
pub async fn build_records<S: RepositorySource>(
    source: &S,
    teams: &[TeamConfig],
) -> Vec<TeamRecord> {
    let mut records = Vec::with_capacity(teams.len());
    for team in teams {
        records.push(build_record(source, team).await);
    }
    records
}
