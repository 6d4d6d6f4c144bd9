//! Runner configuration.

use super::error::RunnerError;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::fetcher::Credential;
use crate::report::DEFAULT_OUTPUT_DIR;
use std::path::{Path, PathBuf};

/// Configuration for a collection run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the team list.
    config_path: PathBuf,
    /// Directory the report artifacts are written to.
    output_dir: PathBuf,
    /// GitHub token used for API calls.
    credential: Credential,
}

impl RunnerConfig {
    /// Creates a configuration with the default team list and output paths.
    pub fn new(credential: Credential) -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            credential,
        }
    }

    /// Creates a configuration from an optional token.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::MissingCredential`] if the token is absent or
    /// blank.
    pub fn from_token(token: Option<String>) -> Result<Self, RunnerError> {
        token
            .and_then(|token| Credential::new(token))
            .map(Self::new)
            .ok_or(RunnerError::MissingCredential)
    }

    /// Sets a custom team list path.
    pub fn with_config_path(mut self, config_path: PathBuf) -> Self {
        self.config_path = config_path;
        self
    }

    /// Sets a custom output directory.
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Returns the team list path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the API credential.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}
