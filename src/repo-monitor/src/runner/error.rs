//! Runner error types.

/// Errors that stop a run before or after collection.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No API token was supplied.
    #[error("GITHUB_TOKEN not found in environment variables")]
    MissingCredential,

    /// Team configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Report persistence errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
