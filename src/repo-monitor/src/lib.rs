//! Collects repository metadata for a fixed list of teams.
//!
//! For every configured team the repository locator is parsed, GitHub is
//! asked for the repository's creation time and fork flag and for its most
//! recent commit, and the outcome becomes one row of a report written as
//! `monitoring_report.csv` and `monitoring_report.json`. Failures for a single
//! team are recorded in that team's row; only a missing credential or team
//! list stops the run.

pub mod config;
pub mod fetcher;
pub mod records;
pub mod reference;
pub mod report;
pub mod runner;
pub mod summary;

mod test_utils;

pub use config::{load_teams, parse_teams, ConfigError, TeamConfig};
pub use fetcher::{
    CommitInfo, Credential, GitHubFetcher, RepoMetadata, RepositorySource, TOKEN_ENV_VAR,
};
pub use records::{
    build_record, build_records, process_team, to_record, RecordStatus, RepoSnapshot,
    TeamFailure, TeamRecord,
};
pub use reference::{parse_repo_url, RepoIdentity};
pub use report::{Report, ReportError, ReportPaths, CSV_FILE_NAME, JSON_FILE_NAME};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
