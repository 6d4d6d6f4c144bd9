//! Orchestrates a collection run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::{load_teams, TeamConfig};
use crate::fetcher::{GitHubFetcher, RepositorySource};
use crate::records::build_records;
use crate::report::Report;
use crate::summary::RunSummary;
use tracing::{info, warn};

/// Runs the full collection flow: load teams, look up every repository and
/// write the report.
pub struct Runner<S = GitHubFetcher> {
    config: RunnerConfig,
    source: S,
}

impl Runner<GitHubFetcher> {
    /// Builds a runner that queries GitHub with the configured credential.
    ///
    /// No request is made until [`Runner::run`].
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let source = GitHubFetcher::new(config.credential())?;
        Ok(Self { config, source })
    }
}

impl<S: RepositorySource> Runner<S> {
    /// Builds a runner over a custom metadata source.
    pub fn with_source(config: RunnerConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Returns the metadata source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Executes the full orchestration flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the team list is missing or invalid,
    /// in which case no request is made and nothing is written, and
    /// [`RunnerError::Report`] if the artifacts cannot be written. Per-team
    /// failures are recorded in the report instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let teams = load_teams(self.config.config_path())?;

        if teams.is_empty() {
            warn!("No teams configured");
        }

        let report = self.collect(&teams).await;
        let paths = report.write(self.config.output_dir())?;

        let mut summary = RunSummary::from_records(report.records());
        summary.output = Some(paths);
        Ok(summary)
    }

    /// Collects one record per team, in order, without writing anything.
    pub async fn collect(&self, teams: &[TeamConfig]) -> Report {
        info!(count = teams.len(), "Starting monitoring");
        let report = Report::new(build_records(&self.source, teams).await);
        info!(rows = report.len(), "Monitoring complete");
        report
    }
}
