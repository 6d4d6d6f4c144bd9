//! Report assembly and persistence.
//!
//! A [`Report`] is written as two co-located artifacts describing the same
//! rows: `monitoring_report.csv` (read by the dashboard) and
//! `monitoring_report.json`. Each run replaces both files in full.

mod csv;
mod error;

pub use self::csv::{format_timestamp, COLUMNS};
pub use error::ReportError;

use crate::records::TeamRecord;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// File name of the tabular artifact.
pub const CSV_FILE_NAME: &str = "monitoring_report.csv";

/// File name of the structured artifact.
pub const JSON_FILE_NAME: &str = "monitoring_report.json";

/// Paths of the artifacts produced by [`Report::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Tabular artifact.
    pub csv: PathBuf,
    /// Structured artifact.
    pub json: PathBuf,
}

impl ReportPaths {
    /// Returns the artifact paths inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            csv: dir.join(CSV_FILE_NAME),
            json: dir.join(JSON_FILE_NAME),
        }
    }
}

/// The ordered records of one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    records: Vec<TeamRecord>,
}

impl Report {
    /// Creates a report from records in configuration order.
    pub fn new(records: Vec<TeamRecord>) -> Self {
        Self { records }
    }

    /// Returns the records.
    pub fn records(&self) -> &[TeamRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the report has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the tabular artifact.
    pub fn to_csv(&self) -> String {
        csv::render(&self.records)
    }

    /// Renders the structured artifact.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes both artifacts into `dir`, creating it if needed.
    ///
    /// Both files are fully written to temporary files in `dir` before either
    /// replaces its previous artifact. The JSON file is swapped in first so
    /// the CSV read by the dashboard never runs ahead of it.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the directory cannot be created or a file
    /// cannot be written.
    pub fn write(&self, dir: &Path) -> Result<ReportPaths, ReportError> {
        std::fs::create_dir_all(dir).map_err(|e| ReportError::IoError {
            path: dir.display().to_string(),
            source: e,
        })?;

        let paths = ReportPaths::in_dir(dir);

        let json = self.to_json().map_err(|e| ReportError::JsonError {
            path: paths.json.display().to_string(),
            source: e,
        })?;

        let staged_json = stage(&paths.json, json.as_bytes())?;
        let staged_csv = stage(&paths.csv, self.to_csv().as_bytes())?;

        persist(staged_json, &paths.json)?;
        persist(staged_csv, &paths.csv)?;

        info!(
            csv = %paths.csv.display(),
            json = %paths.json.display(),
            rows = self.len(),
            "Report written"
        );
        Ok(paths)
    }

    /// Loads a report from a structured artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be read or decoded.
    pub fn read_json(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|e| ReportError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ReportError::JsonError {
            path: path.display().to_string(),
            source: e,
        })
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ReportError {
    ReportError::IoError {
        path: path.display().to_string(),
        source,
    }
}

/// Writes `contents` to a temporary file next to `path`.
fn stage(path: &Path, contents: &[u8]) -> Result<NamedTempFile, ReportError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(|e| io_error(path, e))?;
    file.write_all(contents).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "Staged artifact");
    Ok(file)
}

/// Renames a staged file over `path`.
fn persist(file: NamedTempFile, path: &Path) -> Result<(), ReportError> {
    file.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TeamConfig;
    use crate::records::RecordStatus;
    use crate::test_utils::{commit, ts};
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Report {
        let alpha = TeamConfig::new("Alpha", "https://example.com/org/repoA");
        let beta = TeamConfig::new("Beta, Gamma", "https://example.com/org/missing");
        Report::new(vec![
            TeamRecord::success(
                &alpha,
                ts("2026-01-05T00:00:00Z"),
                false,
                Some(commit("2026-02-01T00:00:00Z")),
            ),
            TeamRecord::failed(&beta, RecordStatus::FetchError),
        ])
    }

    #[test]
    fn creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested/data");

        let paths = sample().write(&dir).unwrap();

        assert_eq!(paths, ReportPaths::in_dir(&dir));
        assert!(paths.csv.is_file());
        assert!(paths.json.is_file());
    }

    #[test]
    fn overwrites_previous_output() {
        let temp = TempDir::new().unwrap();
        sample().write(temp.path()).unwrap();

        let paths = Report::default().write(temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(&paths.csv).unwrap().lines().count(),
            1
        );
        assert_eq!(fs::read_to_string(&paths.json).unwrap(), "[]\n");
    }

    #[test]
    fn json_uses_report_columns_and_nulls() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();

        let first = &json[0];
        assert_eq!(first["Team Name"], "Alpha");
        assert_eq!(first["Status"], "Success");
        assert_eq!(first["Created At"], "2026-01-05T00:00:00Z");
        assert_eq!(first["Is Fork"], false);
        assert_eq!(first["Latest Commit Date"], "2026-02-01T00:00:00Z");

        let second = &json[1];
        assert_eq!(second["Status"], "Error fetching repo");
        assert!(second["Created At"].is_null());
        assert!(second["Is Fork"].is_null());
        assert!(second["Latest Commit Date"].is_null());

        let mut keys: Vec<_> = first.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        let mut expected: Vec<_> = COLUMNS.iter().map(|c| c.to_string()).collect();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn json_round_trips() {
        let temp = TempDir::new().unwrap();
        let report = sample();

        let paths = report.write(temp.path()).unwrap();

        assert_eq!(Report::read_json(&paths.json).unwrap(), report);
    }

    #[test]
    fn read_json_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = Report::read_json(&temp.path().join(JSON_FILE_NAME));
        assert!(matches!(result, Err(ReportError::IoError { .. })));
    }

    #[test]
    fn failed_json_replace_keeps_previous_csv() {
        let temp = TempDir::new().unwrap();
        let paths = ReportPaths::in_dir(temp.path());
        fs::write(&paths.csv, "previous\n").unwrap();
        // A directory in place of the JSON artifact makes its rename fail.
        fs::create_dir(&paths.json).unwrap();
        fs::write(paths.json.join("keep"), "").unwrap();

        let result = sample().write(temp.path());

        assert!(matches!(result, Err(ReportError::IoError { .. })));
        assert_eq!(fs::read_to_string(&paths.csv).unwrap(), "previous\n");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
    }
}
