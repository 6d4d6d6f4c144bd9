//! Repository locator parsing.

use std::fmt;

/// Owner and name of a repository, taken from the last two path segments of
/// its locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoIdentity {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Splits a repository locator into owner and name.
///
/// Trailing slashes are stripped and the string is split on `/`; the last two
/// segments become owner and name. Scheme and host are not checked, so
/// `https://github.com/owner/repo` and `owner/repo` resolve identically.
///
/// Returns `None` when fewer than two segments remain or either segment is
/// empty. Never fails otherwise.
pub fn parse_repo_url(url: &str) -> Option<RepoIdentity> {
    let mut segments = url.trim_end_matches('/').rsplit('/');
    let name = segments.next()?;
    let owner = segments.next()?;

    if owner.is_empty() || name.is_empty() {
        return None;
    }

    Some(RepoIdentity {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}
