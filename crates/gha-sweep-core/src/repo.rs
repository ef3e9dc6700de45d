//! GitHub repository references

/// An `owner/repo` pair naming the repository whose artifacts are swept.
///
/// # Example
///
/// ```
/// use gha_sweep_core::repo::GitHubRepo;
///
/// let repo = GitHubRepo::from_parts("jx009", "InterviewCodeOverlay");
/// assert_eq!(repo.owner(), "jx009");
/// assert_eq!(repo.name(), "InterviewCodeOverlay");
/// assert_eq!(repo.to_string(), "jx009/InterviewCodeOverlay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitHubRepo {
    owner: String,
    name: String,
}

impl GitHubRepo {
    /// Build a reference from an owner and a repository name.
    pub fn from_parts(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Get the owner part.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repo name part.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
