#![cfg(test)]

use crate::fetcher::{CommitInfo, RepoMetadata, RepositorySource};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

pub fn repo(created_at: &str, is_fork: bool) -> RepoMetadata {
    RepoMetadata {
        created_at: Some(ts(created_at)),
        is_fork: Some(is_fork),
    }
}

pub fn commit(author_date: &str) -> CommitInfo {
    CommitInfo {
        author_date: Some(ts(author_date)),
    }
}

/// Canned responses keyed by `owner/name`. Unknown repositories fail both
/// lookups.
#[derive(Default)]
pub struct FakeSource {
    repos: HashMap<String, RepoMetadata>,
    commits: HashMap<String, CommitInfo>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_repo(mut self, full_name: &str, metadata: RepoMetadata) -> Self {
        self.repos.insert(full_name.to_string(), metadata);
        self
    }

    pub fn with_commit(mut self, full_name: &str, commit: CommitInfo) -> Self {
        self.commits.insert(full_name.to_string(), commit);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl RepositorySource for FakeSource {
    async fn fetch_repo_details(&self, owner: &str, name: &str) -> Option<RepoMetadata> {
        let key = format!("{owner}/{name}");
        self.calls.lock().unwrap().push(format!("repo {key}"));
        self.repos.get(&key).copied()
    }

    async fn fetch_latest_commit(&self, owner: &str, name: &str) -> Option<CommitInfo> {
        let key = format!("{owner}/{name}");
        self.calls.lock().unwrap().push(format!("commits {key}"));
        self.commits.get(&key).copied()
    }
}
