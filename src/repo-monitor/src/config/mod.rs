//! Team configuration loading.
//!
//! The team list is a JSON array of `{ "team_name", "repo_url" }` objects,
//! read once at startup. Its order defines the row order of the report.

mod error;
mod team;

pub use error::ConfigError;
pub use team::TeamConfig;

use std::path::Path;
use tracing::{debug, info};

/// Default location of the team list, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/repos.json";

/// Loads the ordered team list from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the `repos.json` file
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the file does not exist, and
/// [`ConfigError::IoError`] or [`ConfigError::ParseError`] if it cannot be
/// read or is not a JSON array of team objects.
pub fn load_teams(path: &Path) -> Result<Vec<TeamConfig>, ConfigError> {
    info!(path = %path.display(), "Loading team configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let teams = parse_teams(&content).map_err(|e| ConfigError::ParseError {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(count = teams.len(), "Loaded teams");
    Ok(teams)
}

/// Parses a team list from JSON text.
pub fn parse_teams(content: &str) -> Result<Vec<TeamConfig>, serde_json::Error> {
    serde_json::from_str(content)
}
