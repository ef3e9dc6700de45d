//! Terminal output for a sweep run.
//!
//! Runs are strictly sequential, so every event is printed immediately to
//! stdout. Line layout lives in the `format_*` helpers; [`Output`] only adds
//! color and icons.

use crossterm::style::Stylize;
use gha_sweep_core::{Artifact, DeleteError, GitHubRepo, Reporter, RunSummary, format_mb};

use super::theme::Theme;

/// Inventory line: ` 3. dist (12.4MB) - 2024-05-01`
pub fn format_artifact_line(index: usize, artifact: &Artifact) -> String {
    format!(
        "{index:2}. {} ({:.1}MB) - {}",
        artifact.name,
        artifact.size_mb(),
        artifact.created_date()
    )
}

/// Progress prefix: `[ 3/12]`
pub fn format_position(index: usize, count: usize) -> String {
    format!("[{index:2}/{count}]")
}

/// Handle used by commands to print run progress.
#[derive(Debug, Clone, Default)]
pub struct Output {
    theme: Theme,
}

impl Output {
    /// Create a new output handle with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the tool banner.
    pub fn banner(&self) {
        println!("{}", "GitHub Actions artifact sweeper".bold());
        println!("{}", "=".repeat(50).with(self.theme.colors.header));
    }

    /// Prints an informational message to the console.
    pub fn info(&self, msg: &str) {
        println!(
            "{} {msg}",
            self.theme.icons.info.with(self.theme.colors.secondary)
        );
    }

    /// Prints a success message to the console.
    pub fn success(&self, msg: &str) {
        println!(
            "{} {}",
            self.theme.icons.success.with(self.theme.colors.success),
            msg.with(self.theme.colors.success)
        );
    }

    /// Prints a warning message to the console.
    pub fn warning(&self, msg: &str) {
        println!(
            "{} {}",
            self.theme.icons.warning.with(self.theme.colors.warning),
            msg.with(self.theme.colors.warning)
        );
    }

    /// Prints an error message to the console.
    pub fn error(&self, msg: &str) {
        println!(
            "{} {}",
            self.theme.icons.error.with(self.theme.colors.error),
            msg.with(self.theme.colors.error)
        );
    }
}

impl Reporter for Output {
    fn listing(&self, repo: &GitHubRepo) {
        self.info(&format!("Fetching artifacts of {repo}..."));
    }

    fn found(&self, count: usize) {
        if count == 0 {
            self.success("No artifacts to clean");
        } else {
            self.info(&format!("Found {count} artifacts"));
        }
    }

    fn truncated(&self, remaining: u64) {
        self.warning(&format!(
            "{remaining} more artifacts exist beyond the first page; run again to delete them"
        ));
    }

    fn artifact(&self, index: usize, artifact: &Artifact) {
        println!("{}", format_artifact_line(index, artifact));
    }

    fn total(&self, bytes: u64) {
        println!();
        println!(
            "{} {}",
            "Total size:".with(self.theme.colors.header),
            format_mb(bytes).bold()
        );
    }

    fn deleting(&self, count: usize) {
        println!();
        self.info(&format!("Deleting {count} artifacts..."));
    }

    fn deleted(&self, index: usize, count: usize, artifact: &Artifact) {
        println!(
            "{} {} Deleted: {}",
            self.theme.icons.success.with(self.theme.colors.success),
            format_position(index, count).with(self.theme.colors.secondary),
            artifact.name.as_str().with(self.theme.colors.name)
        );
    }

    fn delete_failed(&self, index: usize, count: usize, artifact: &Artifact, err: &DeleteError) {
        println!(
            "{} {} Failed: {} ({})",
            self.theme.icons.error.with(self.theme.colors.error),
            format_position(index, count).with(self.theme.colors.secondary),
            artifact.name.as_str().with(self.theme.colors.name),
            err.to_string().with(self.theme.colors.error)
        );
    }

    fn summary(&self, summary: &RunSummary) {
        println!();
        self.info("Cleanup finished");
        self.success(&format!("Deleted: {} artifacts", summary.deleted));
        if summary.failed > 0 {
            self.error(&format!("Failed: {} artifacts", summary.failed));
        }
        self.info(&format!(
            "Space freed: ~{}",
            format_mb(summary.freed_bytes)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gha_sweep_core::ArtifactId;

    #[test]
    fn test_artifact_line_layout() {
        let artifact = Artifact {
            id: ArtifactId::new(5),
            name: "dist-linux".to_string(),
            size_in_bytes: 10 * 1024 * 1024,
            created_at: "2024-05-01T08:00:00Z".to_string(),
        };
        assert_eq!(
            format_artifact_line(3, &artifact),
            " 3. dist-linux (10.0MB) - 2024-05-01"
        );
        assert_eq!(
            format_artifact_line(12, &artifact),
            "12. dist-linux (10.0MB) - 2024-05-01"
        );
    }

    #[test]
    fn test_position_layout() {
        assert_eq!(format_position(1, 3), "[ 1/3]");
        assert_eq!(format_position(10, 12), "[10/12]");
    }
}
