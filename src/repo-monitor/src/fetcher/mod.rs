//! Remote repository metadata lookups.
//!
//! Two independent lookups are made per repository: the repository itself and
//! its most recent commit. Each is a single request with no retry, and every
//! failure (not found, forbidden, rate limited, transport error) collapses to
//! `None`. The underlying error is only visible in debug logs.

mod credential;
mod metadata;

pub use credential::{Credential, TOKEN_ENV_VAR};
pub use metadata::{CommitInfo, RepoMetadata};

use octocrab::Octocrab;
use std::future::Future;
use tracing::debug;

/// Source of repository metadata.
///
/// [`GitHubFetcher`] is the production implementation; tests substitute
/// canned responses.
pub trait RepositorySource {
    /// Looks up repository attributes. `None` if the lookup did not succeed.
    fn fetch_repo_details(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Option<RepoMetadata>> + Send;

    /// Looks up the single most recent commit. `None` if the lookup did not
    /// succeed or the repository has no commits.
    fn fetch_latest_commit(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Option<CommitInfo>> + Send;
}

/// [`RepositorySource`] backed by the GitHub REST API.
#[derive(Clone)]
pub struct GitHubFetcher {
    octocrab: Octocrab,
}

impl GitHubFetcher {
    /// Builds an authenticated client. No request is made.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(credential: &Credential) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(credential.token().to_string())
            .build()?;
        Ok(Self { octocrab })
    }

    /// Builds an authenticated client for a non-default API root, such as a
    /// GitHub Enterprise server.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_uri` is not a valid URI or the HTTP client
    /// cannot be constructed.
    pub fn with_base_uri(credential: &Credential, base_uri: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .base_uri(base_uri)?
            .personal_token(credential.token().to_string())
            .build()?;
        Ok(Self { octocrab })
    }
}

impl RepositorySource for GitHubFetcher {
    async fn fetch_repo_details(&self, owner: &str, name: &str) -> Option<RepoMetadata> {
        match self.octocrab.repos(owner, name).get().await {
            Ok(repo) => Some(RepoMetadata::from(&repo)),
            Err(e) => {
                debug!(owner, name, error = %e, "Repository lookup failed");
                None
            }
        }
    }

    async fn fetch_latest_commit(&self, owner: &str, name: &str) -> Option<CommitInfo> {
        let page = self
            .octocrab
            .repos(owner, name)
            .list_commits()
            .per_page(1)
            .send()
            .await;

        match page {
            Ok(page) => page.items.first().map(CommitInfo::from),
            Err(e) => {
                debug!(owner, name, error = %e, "Commit lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ts;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const REPOSITORY: &str = include_str!("../../tests/fixtures/github/repository.json");
    const COMMITS: &str = include_str!("../../tests/fixtures/github/commits.json");
    const NOT_FOUND: &str = include_str!("../../tests/fixtures/github/not_found.json");
    const EMPTY_REPOSITORY: &str =
        include_str!("../../tests/fixtures/github/empty_repository.json");

    fn route(path: &str) -> (&'static str, &'static str) {
        match path {
            "/repos/org/repoA" | "/repos/org/fresh" | "/repos/org/bare" => ("200 OK", REPOSITORY),
            "/repos/org/repoA/commits" => ("200 OK", COMMITS),
            "/repos/org/fresh/commits" => ("200 OK", "[]"),
            "/repos/org/bare/commits" => ("409 Conflict", EMPTY_REPOSITORY),
            _ => ("404 Not Found", NOT_FOUND),
        }
    }

    /// Serves canned GitHub replies over plain HTTP and returns the base URI.
    async fn serve_github() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut request = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                        let n = stream.read(&mut chunk).await.unwrap();
                        if n == 0 {
                            return;
                        }
                        request.extend_from_slice(&chunk[..n]);
                    }

                    let request = String::from_utf8_lossy(&request);
                    let target = request.split_whitespace().nth(1).unwrap_or("/");
                    let path = target.split('?').next().unwrap_or("/");
                    let (status, body) = route(path);

                    let response = format!(
                        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    stream.write_all(response.as_bytes()).await.unwrap();
                    let _ = stream.shutdown().await;
                });
            }
        });

        format!("http://{addr}")
    }

    async fn fetcher() -> GitHubFetcher {
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let credential = Credential::new("test-token").unwrap();
        GitHubFetcher::with_base_uri(&credential, &serve_github().await).unwrap()
    }

    #[tokio::test]
    async fn fetches_repository_and_latest_commit() {
        let fetcher = fetcher().await;

        let metadata = fetcher.fetch_repo_details("org", "repoA").await.unwrap();
        let commit = fetcher.fetch_latest_commit("org", "repoA").await.unwrap();

        assert_eq!(metadata.created_at, Some(ts("2026-01-05T00:00:00Z")));
        assert_eq!(metadata.is_fork, Some(true));
        assert_eq!(commit.author_date, Some(ts("2026-02-01T00:00:00Z")));
    }

    #[tokio::test]
    async fn not_found_repository_is_none() {
        let fetcher = fetcher().await;

        assert_eq!(fetcher.fetch_repo_details("org", "missing").await, None);
    }

    #[tokio::test]
    async fn empty_commit_list_is_none() {
        let fetcher = fetcher().await;

        assert_eq!(fetcher.fetch_latest_commit("org", "fresh").await, None);
    }

    #[tokio::test]
    async fn empty_repository_conflict_is_none() {
        let fetcher = fetcher().await;

        assert!(fetcher.fetch_repo_details("org", "bare").await.is_some());
        assert_eq!(fetcher.fetch_latest_commit("org", "bare").await, None);
    }
}
