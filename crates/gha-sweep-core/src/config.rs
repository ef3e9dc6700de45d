//! Run configuration.
//!
//! The sweeper has no config file and reads nothing from the environment:
//! [`SweepConfig::default`] is what the binary uses. The builder methods exist
//! so tests can point the client at a local server.

use std::time::Duration;

use crate::repo::GitHubRepo;

/// Root of the GitHub REST API.
pub const GITHUB_API: &str = "https://api.github.com";

/// Owner of the repository swept by default.
pub const DEFAULT_OWNER: &str = "jx009";

/// Name of the repository swept by default.
pub const DEFAULT_REPO: &str = "InterviewCodeOverlay";

/// Largest page the artifacts endpoint will return.
pub const PER_PAGE: u32 = 100;

/// Pause between consecutive delete calls.
pub const DELETE_DELAY: Duration = Duration::from_millis(100);

/// Timeout applied to every HTTP call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// `X-GitHub-Api-Version` sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Everything a [`Cleaner`](crate::Cleaner) needs besides the credential.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// API root, without trailing slash.
    pub api_root: String,
    /// Repository whose artifacts are deleted.
    pub repo: GitHubRepo,
    /// Page size requested from the listing endpoint.
    pub per_page: u32,
    /// Pause between consecutive delete calls.
    pub delete_delay: Duration,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            api_root: GITHUB_API.to_string(),
            repo: GitHubRepo::from_parts(DEFAULT_OWNER, DEFAULT_REPO),
            per_page: PER_PAGE,
            delete_delay: DELETE_DELAY,
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl SweepConfig {
    /// Point the client at a different API root (e.g. a mock server).
    pub fn with_api_root(mut self, root: impl Into<String>) -> Self {
        self.api_root = root.into().trim_end_matches('/').to_string();
        self
    }

    /// Sweep a different repository.
    pub fn with_repo(mut self, repo: GitHubRepo) -> Self {
        self.repo = repo;
        self
    }

    /// Override the pause between deletes.
    pub fn with_delete_delay(mut self, delay: Duration) -> Self {
        self.delete_delay = delay;
        self
    }

    /// `{api_root}/repos/{owner}/{repo}`
    pub fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_root,
            self.repo.owner(),
            self.repo.name()
        )
    }

    /// Listing endpoint, without the query string.
    pub fn artifacts_url(&self) -> String {
        format!("{}/actions/artifacts", self.repo_url())
    }

    /// Endpoint addressing a single artifact.
    pub fn artifact_url(&self, id: crate::types::ArtifactId) -> String {
        format!("{}/{id}", self.artifacts_url())
    }
}
