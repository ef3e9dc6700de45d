//! GitHub Actions artifacts REST client.
//!
//! Two calls are needed: one page of the artifact listing and a delete per
//! artifact. Both carry the bearer credential; the remaining headers are set
//! once on the underlying [`reqwest::Client`].

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};

use crate::config::{API_VERSION, SweepConfig};
use crate::error::{CleanError, DeleteError};
use crate::types::{ArtifactId, ArtifactPage};

/// Build the HTTP client shared by every call of a run.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialized.
pub fn build_client(config: &SweepConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    headers.insert(
        "x-github-api-version",
        HeaderValue::from_static(API_VERSION),
    );

    Client::builder()
        .user_agent(crate::USER_AGENT)
        .default_headers(headers)
        .timeout(config.timeout)
        .build()
}

/// Authenticated access to one repository's artifacts.
pub struct GithubClient {
    http: Client,
    config: SweepConfig,
    token: String,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient")
            .field("repo", &self.config.repo)
            .field("api_root", &self.config.api_root)
            .finish_non_exhaustive()
    }
}

impl GithubClient {
    /// Create a client for `config.repo` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: SweepConfig, token: impl Into<String>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: build_client(&config)?,
            config,
            token: token.into(),
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Fetch the first page (up to `per_page` items) of the artifact listing.
    ///
    /// # Errors
    ///
    /// [`CleanError::Listing`] for any status other than `200 OK`,
    /// [`CleanError::Network`] on transport failure and
    /// [`CleanError::Decode`] when the body is not an artifact listing.
    pub async fn list_artifacts(&self) -> Result<ArtifactPage, CleanError> {
        let url = self.config.artifacts_url();
        tracing::debug!("GET {url}?per_page={}", self.config.per_page);

        let resp = self
            .http
            .get(&url)
            .query(&[("per_page", self.config.per_page)])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if status != StatusCode::OK {
            return Err(CleanError::Listing { status, body });
        }

        let page: ArtifactPage = serde_json::from_str(&body)?;
        tracing::debug!(
            "listed {} of {} artifacts",
            page.artifacts.len(),
            page.total_count
        );
        Ok(page)
    }

    /// Delete one artifact. Only `204 No Content` counts as success.
    ///
    /// # Errors
    ///
    /// [`DeleteError::Status`] for any other status, [`DeleteError::Network`]
    /// on transport failure.
    pub async fn delete_artifact(&self, id: ArtifactId) -> Result<(), DeleteError> {
        let url = self.config.artifact_url(id);
        tracing::debug!("DELETE {url}");

        let resp = self.http.delete(&url).bearer_auth(&self.token).send().await?;
        match resp.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(DeleteError::Status(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    fn config_for(server: &ServerGuard) -> SweepConfig {
        SweepConfig::default().with_api_root(server.url())
    }

    #[tokio::test]
    async fn test_list_sends_auth_and_api_headers() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/repos/jx009/InterviewCodeOverlay/actions/artifacts")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .match_header("authorization", "Bearer secret-token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", API_VERSION)
            .match_header("user-agent", crate::USER_AGENT)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"total_count":2,"artifacts":[
                    {"id":1,"name":"a","size_in_bytes":10,"created_at":"2024-01-01T00:00:00Z"},
                    {"id":2,"name":"b","size_in_bytes":20,"created_at":"2024-01-02T00:00:00Z"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = GithubClient::new(config_for(&server), "secret-token").unwrap();
        let page = client.list_artifacts().await.unwrap();

        m.assert_async().await;
        let names: Vec<&str> = page.artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_non_200_keeps_status_and_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", Matcher::Any)
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(config_for(&server), "bad").unwrap();
        let err = client.list_artifacts().await.unwrap_err();

        match err {
            CleanError::Listing { status, body } => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, r#"{"message":"Bad credentials"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = GithubClient::new(config_for(&server), "t").unwrap();
        let err = client.list_artifacts().await.unwrap_err();
        assert!(matches!(err, CleanError::Decode(_)));
    }

    #[tokio::test]
    async fn test_list_unreachable_is_network_error() {
        // Nothing listens on port 9 (discard) in the test environment.
        let config = SweepConfig::default().with_api_root("http://127.0.0.1:9");
        let client = GithubClient::new(config, "t").unwrap();
        let err = client.list_artifacts().await.unwrap_err();
        assert!(matches!(err, CleanError::Network(_)));
    }

    #[tokio::test]
    async fn test_delete_only_204_is_success() {
        let mut server = Server::new_async().await;
        let _ok = server
            .mock("DELETE", "/repos/jx009/InterviewCodeOverlay/actions/artifacts/7")
            .match_header("authorization", "Bearer t")
            .with_status(204)
            .create_async()
            .await;
        let _gone = server
            .mock("DELETE", "/repos/jx009/InterviewCodeOverlay/actions/artifacts/8")
            .with_status(200)
            .create_async()
            .await;

        let client = GithubClient::new(config_for(&server), "t").unwrap();
        assert!(client.delete_artifact(ArtifactId::new(7)).await.is_ok());

        let err = client
            .delete_artifact(ArtifactId::new(8))
            .await
            .unwrap_err();
        assert!(matches!(err, DeleteError::Status(StatusCode::OK)));
    }
}
