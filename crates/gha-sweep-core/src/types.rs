//! Artifact records and run accounting.
//!
//! [`Artifact`] mirrors the subset of the GitHub Actions artifact object the
//! sweeper needs. Everything here lives for a single run only.

use serde::Deserialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Opaque artifact identifier assigned by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(u64);

impl ArtifactId {
    /// Wrap a raw identifier.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored build artifact as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Artifact {
    /// Identifier used to address the artifact in delete calls.
    pub id: ArtifactId,
    /// Display name chosen by the workflow that uploaded it.
    pub name: String,
    /// Stored size.
    pub size_in_bytes: u64,
    /// ISO-8601 creation timestamp, kept verbatim.
    pub created_at: String,
}

impl Artifact {
    /// Size in megabytes.
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.size_in_bytes)
    }

    /// The `YYYY-MM-DD` prefix of the creation timestamp.
    ///
    /// Falls back to the full string when it is shorter than a date.
    pub fn created_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

/// Body of `GET /repos/{owner}/{repo}/actions/artifacts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtifactPage {
    /// Total number of artifacts the repository holds, across all pages.
    #[serde(default)]
    pub total_count: u64,
    /// Artifacts on this page, in service order.
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}

impl ArtifactPage {
    /// Number of artifacts that exist beyond this page.
    pub fn remaining(&self) -> u64 {
        self.total_count
            .saturating_sub(self.artifacts.len() as u64)
    }
}

/// Counters for one pass of deletions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Delete calls issued.
    pub attempted: usize,
    /// Delete calls answered with `204 No Content`.
    pub deleted: usize,
    /// Delete calls that failed for any reason.
    pub failed: usize,
    /// Aggregate size of every listed artifact.
    pub total_bytes: u64,
    /// Aggregate size of the artifacts actually deleted.
    pub freed_bytes: u64,
}

impl RunSummary {
    /// A pass counts as successful once at least one artifact was deleted.
    pub fn succeeded(&self) -> bool {
        self.deleted > 0
    }
}

/// Result of a complete run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The listing was empty; nothing was deleted and nothing failed.
    Empty,
    /// Deletions were attempted.
    Completed(RunSummary),
}

impl RunOutcome {
    /// Whether the run reached its goal.
    pub fn is_success(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Completed(summary) => summary.succeeded(),
        }
    }

    /// The deletion counters, if deletions were attempted.
    pub fn summary(&self) -> Option<&RunSummary> {
        match self {
            Self::Empty => None,
            Self::Completed(summary) => Some(summary),
        }
    }
}

/// Convert a byte count to megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Render a byte count as megabytes with one decimal place, e.g. `60.0MB`.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.1}MB", bytes_to_mb(bytes))
}

/// Sum of the sizes of `artifacts`.
pub fn total_size(artifacts: &[Artifact]) -> u64 {
    artifacts.iter().map(|a| a.size_in_bytes).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn artifact(id: u64, size: u64) -> Artifact {
        Artifact {
            id: ArtifactId::new(id),
            name: format!("build-{id}"),
            size_in_bytes: size,
            created_at: "2024-03-05T10:20:30Z".to_string(),
        }
    }

    #[test]
    fn test_decode_listing_ignores_extra_fields() {
        let body = r#"{
            "total_count": 1,
            "artifacts": [{
                "id": 11,
                "node_id": "MDg6QXJ0aWZhY3QxMQ==",
                "name": "dist",
                "size_in_bytes": 556,
                "url": "https://api.github.com/repos/o/r/actions/artifacts/11",
                "expired": false,
                "created_at": "2020-01-10T14:59:22Z",
                "expires_at": "2020-03-21T14:59:22Z"
            }]
        }"#;

        let page: ArtifactPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.artifacts.len(), 1);
        assert_eq!(page.artifacts[0].id, ArtifactId::new(11));
        assert_eq!(page.artifacts[0].created_date(), "2020-01-10");
        assert_eq!(page.remaining(), 0);
    }

    #[test]
    fn test_missing_artifacts_field_is_empty() {
        let page: ArtifactPage = serde_json::from_str("{}").unwrap();
        assert!(page.artifacts.is_empty());
    }

    #[test]
    fn test_remaining_counts_unlisted() {
        let page = ArtifactPage {
            total_count: 150,
            artifacts: (0..100).map(|i| artifact(i, 1)).collect(),
        };
        assert_eq!(page.remaining(), 50);
    }

    #[test]
    fn test_created_date_short_timestamp() {
        let mut a = artifact(1, 0);
        a.created_at = "2024".to_string();
        assert_eq!(a.created_date(), "2024");
    }

    #[test]
    fn test_total_size_in_megabytes() {
        let artifacts = vec![artifact(1, 10 * MB), artifact(2, 20 * MB), artifact(3, 30 * MB)];
        assert_eq!(format_mb(total_size(&artifacts)), "60.0MB");
        assert_eq!(format_mb(total_size(&[])), "0.0MB");
    }

    #[test]
    fn test_format_mb_rounds_to_one_decimal() {
        assert_eq!(format_mb(MB + MB / 2), "1.5MB");
        assert_eq!(format_mb(556), "0.0MB");
        assert_eq!(format_mb(MB * 99 / 10), "9.9MB");
    }

    #[test]
    fn test_outcome_success_rules() {
        assert!(RunOutcome::Empty.is_success());

        let none_deleted = RunSummary {
            attempted: 2,
            failed: 2,
            ..RunSummary::default()
        };
        assert!(!RunOutcome::Completed(none_deleted).is_success());

        let partial = RunSummary {
            attempted: 2,
            deleted: 1,
            failed: 1,
            ..RunSummary::default()
        };
        assert!(RunOutcome::Completed(partial).is_success());
    }
}
