//! Run summary types.

use crate::records::{RecordStatus, TeamRecord};
use crate::report::ReportPaths;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of teams processed.
    pub teams_processed: usize,

    /// Number of teams whose repository was fetched.
    pub succeeded: usize,

    /// Number of teams whose repository lookup failed.
    pub fetch_errors: usize,

    /// Number of teams with an unparseable repository URL.
    pub invalid_urls: usize,

    /// Number of successful teams with no commit date.
    pub without_commits: usize,

    /// Number of successful teams whose repository is a fork.
    pub forks: usize,

    /// Where the report was written.
    pub output: Option<ReportPaths>,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a team record.
    pub fn record_result(&mut self, record: &TeamRecord) {
        self.teams_processed += 1;
        match record.status {
            RecordStatus::Success => {
                self.succeeded += 1;
                if record.latest_commit_date.is_none() {
                    self.without_commits += 1;
                }
                if record.is_fork == Some(true) {
                    self.forks += 1;
                }
            }
            RecordStatus::FetchError => self.fetch_errors += 1,
            RecordStatus::InvalidUrl => self.invalid_urls += 1,
        }
    }

    /// Builds a summary from a sequence of records.
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TeamRecord>) -> Self {
        let mut summary = Self::new();
        for record in records {
            summary.record_result(record);
        }
        summary
    }

    /// Returns true if any team failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.fetch_errors > 0 || self.invalid_urls > 0
    }

    /// Returns true if every team succeeded.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.succeeded == self.teams_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TeamConfig;
    use crate::test_utils::{commit, ts};

    #[test]
    fn can_record_results() {
        let team = TeamConfig::new("Alpha", "https://github.com/org/a");
        let created = ts("2026-01-05T00:00:00Z");
        let records = [
            TeamRecord::success(&team, created, true, Some(commit("2026-02-01T00:00:00Z"))),
            TeamRecord::success(&team, created, false, None),
            TeamRecord::failed(&team, RecordStatus::FetchError),
            TeamRecord::failed(&team, RecordStatus::InvalidUrl),
        ];

        let summary = RunSummary::from_records(&records);

        assert_eq!(summary.teams_processed, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.fetch_errors, 1);
        assert_eq!(summary.invalid_urls, 1);
        assert_eq!(summary.without_commits, 1);
        assert_eq!(summary.forks, 1);
        assert!(summary.has_failures());
        assert!(!summary.all_success());
    }

    #[test]
    fn empty_run_is_successful() {
        let summary = RunSummary::new();
        assert!(summary.all_success());
        assert!(!summary.has_failures());
    }
}
