//! Remote metadata payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository attributes returned by the repository lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    /// When the repository was created.
    pub created_at: Option<DateTime<Utc>>,

    /// Whether GitHub flags the repository as a fork.
    pub is_fork: Option<bool>,
}

impl From<&octocrab::models::Repository> for RepoMetadata {
    fn from(repo: &octocrab::models::Repository) -> Self {
        Self {
            created_at: repo.created_at,
            is_fork: repo.fork,
        }
    }
}

/// The most recent commit of a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Authoring timestamp of the commit.
    pub author_date: Option<DateTime<Utc>>,
}

impl From<&octocrab::models::repos::RepoCommit> for CommitInfo {
    fn from(commit: &octocrab::models::repos::RepoCommit) -> Self {
        Self {
            author_date: commit.commit.author.as_ref().and_then(|a| a.date),
        }
    }
}
