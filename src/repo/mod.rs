//! Repository metadata lookup by import path.
//!
//! GitHub paths go through the API; two well-known toolchain prefixes
//! map to fixed metadata without a network call. Everything else is
//! unrecognized, which callers treat as "no metadata", not a failure of
//! the run.

pub mod github;
pub mod wellknown;

use thiserror::Error;

pub use github::GitHubClient;

use crate::models::Repository;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not a recognized repository path: {0}")]
    UnrecognizedPath(String),

    #[error("GitHub error 403 - possibly rate limit exceeded. Did you supply GitHub credentials?")]
    RateLimited,

    #[error("GitHub error {0}")]
    Status(u16),

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Resolve repository metadata for an import path. Only the GitHub
/// branch performs network I/O; no branch retries.
pub async fn resolve(path: &str, github: &GitHubClient) -> Result<Repository, RepoError> {
    if path.starts_with("github.com/") {
        return github.resolve(path).await;
    }

    if path.starts_with("honnef.co/") {
        return wellknown::honnef(path);
    }

    if path.starts_with("golang.org/") {
        return wellknown::golang(path);
    }

    Err(RepoError::UnrecognizedPath(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_prefix_is_unrecognized_without_network() {
        // The client points nowhere reachable; dispatch must fail before
        // any request is attempted.
        let client = GitHubClient::with_base_url("http://127.0.0.1:1", None);

        let err = resolve("bitbucket.org/foo/bar", &client).await.unwrap_err();
        assert!(matches!(err, RepoError::UnrecognizedPath(_)));
    }

    #[tokio::test]
    async fn golang_path_outside_tools_is_unrecognized() {
        let client = GitHubClient::with_base_url("http://127.0.0.1:1", None);

        let err = resolve("golang.org/x/lint/golint", &client).await.unwrap_err();
        assert!(matches!(err, RepoError::UnrecognizedPath(_)));
    }
}
