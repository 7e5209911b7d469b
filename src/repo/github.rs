use serde::Deserialize;

use crate::models::Repository;

use super::RepoError;

const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, Deserialize)]
struct RepoPayload {
    owner: OwnerPayload,
    html_url: String,
}

#[derive(Debug, Deserialize)]
struct OwnerPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
    name: Option<String>,
}

/// Thin GitHub API client with optional basic auth. The base URL is
/// injectable so tests can point it at a local mock server.
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    auth: Option<(String, String)>,
}

impl GitHubClient {
    /// Credentials are only used when both username and token are set.
    pub fn new(user: Option<String>, token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_API_BASE, user.zip(token))
    }

    pub fn with_base_url(base_url: impl Into<String>, auth: Option<(String, String)>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth,
        }
    }

    /// Fetch maintainer and URL for a `github.com/<owner>/<repo>[/...]`
    /// import path: one call for the repository, one for its owner. The
    /// maintainer is the owner's display name, falling back to the login
    /// handle when none is set.
    pub async fn resolve(&self, path: &str) -> Result<Repository, RepoError> {
        let mut parts = path.split('/');
        let (owner, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some("github.com"), Some(owner), Some(name)) => (owner, name),
            _ => return Err(RepoError::UnrecognizedPath(path.to_string())),
        };

        let repo: RepoPayload = self
            .get(format!("{}/repos/{}/{}", self.base_url, owner, name))
            .await?;

        let user: UserPayload = self
            .get(format!("{}/users/{}", self.base_url, repo.owner.login))
            .await?;

        let maintainer = user
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or(user.login);

        Ok(Repository {
            maintainer,
            url: repo.html_url,
        })
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, RepoError> {
        let mut request = self
            .client
            .get(&url)
            .header("User-Agent", "golinters/0.1.0");

        if let Some((user, token)) = &self.auth {
            request = request.basic_auth(user, Some(token));
        }

        let response = request.send().await?;

        match response.status().as_u16() {
            403 => Err(RepoError::RateLimited),
            code if code >= 400 => Err(RepoError::Status(code)),
            _ => Ok(response.json().await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn resolves_maintainer_and_url() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/kisielk/errcheck");
                then.status(200).json_body(json!({
                    "owner": { "login": "kisielk" },
                    "html_url": "https://github.com/kisielk/errcheck"
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/kisielk");
                then.status(200).json_body(json!({
                    "login": "kisielk",
                    "name": "Kamil Kisiel"
                }));
            })
            .await;

        let client = GitHubClient::with_base_url(server.base_url(), None);
        let repo = client.resolve("github.com/kisielk/errcheck").await.unwrap();

        assert_eq!(repo.maintainer, "Kamil Kisiel");
        assert_eq!(repo.url, "https://github.com/kisielk/errcheck");
    }

    #[tokio::test]
    async fn empty_display_name_falls_back_to_login() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/mibk/dupl");
                then.status(200).json_body(json!({
                    "owner": { "login": "mibk" },
                    "html_url": "https://github.com/mibk/dupl"
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/mibk");
                then.status(200).json_body(json!({ "login": "mibk", "name": "" }));
            })
            .await;

        let client = GitHubClient::with_base_url(server.base_url(), None);
        let repo = client.resolve("github.com/mibk/dupl/suffix").await.unwrap();

        assert_eq!(repo.maintainer, "mibk");
    }

    #[tokio::test]
    async fn forbidden_mentions_rate_limiting() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/foo/bar");
                then.status(403).json_body(json!({ "message": "rate limited" }));
            })
            .await;

        let client = GitHubClient::with_base_url(server.base_url(), None);
        let err = client.resolve("github.com/foo/bar").await.unwrap_err();

        assert!(matches!(err, RepoError::RateLimited));
        assert!(err.to_string().contains("rate limit"));
    }

    #[tokio::test]
    async fn other_client_errors_carry_the_status() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/repos/foo/gone");
                then.status(404).json_body(json!({ "message": "Not Found" }));
            })
            .await;

        let client = GitHubClient::with_base_url(server.base_url(), None);
        let err = client.resolve("github.com/foo/gone").await.unwrap_err();

        assert!(matches!(err, RepoError::Status(404)));
    }

    #[tokio::test]
    async fn too_short_path_is_unrecognized() {
        let client = GitHubClient::with_base_url("http://127.0.0.1:1", None);
        let err = client.resolve("github.com/onlyowner").await.unwrap_err();

        assert!(matches!(err, RepoError::UnrecognizedPath(_)));
    }
}
