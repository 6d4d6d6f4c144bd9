use chrono::{DateTime, Utc};
use repo_monitor::{CommitInfo, RepoMetadata, RepositorySource};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

/// In-memory GitHub stand-in keyed by `owner/name`.
#[derive(Default)]
pub struct StubGitHub {
    repos: HashMap<String, RepoMetadata>,
    commits: HashMap<String, CommitInfo>,
    requests: Mutex<usize>,
}

impl StubGitHub {
    /// Responses matching `tests/fixtures/repos.json`.
    pub fn for_fixture() -> Self {
        let mut stub = Self::default();
        stub.repos.insert(
            "org/repoA".to_string(),
            RepoMetadata {
                created_at: Some(ts("2026-01-05T00:00:00Z")),
                is_fork: Some(false),
            },
        );
        stub.commits.insert(
            "org/repoA".to_string(),
            CommitInfo {
                author_date: Some(ts("2026-02-01T00:00:00Z")),
            },
        );
        stub.repos.insert(
            "org/fresh".to_string(),
            RepoMetadata {
                created_at: Some(ts("2026-03-10T12:00:00Z")),
                is_fork: Some(true),
            },
        );
        stub
    }

    pub fn requests(&self) -> usize {
        *self.requests.lock().unwrap()
    }
}

impl RepositorySource for StubGitHub {
    async fn fetch_repo_details(&self, owner: &str, name: &str) -> Option<RepoMetadata> {
        *self.requests.lock().unwrap() += 1;
        self.repos.get(&format!("{owner}/{name}")).copied()
    }

    async fn fetch_latest_commit(&self, owner: &str, name: &str) -> Option<CommitInfo> {
        *self.requests.lock().unwrap() += 1;
        self.commits.get(&format!("{owner}/{name}")).copied()
    }
}
