//! The list-then-delete run loop.

use crate::config::SweepConfig;
use crate::error::CleanError;
use crate::github::GithubClient;
use crate::reporter::Reporter;
use crate::types::{Artifact, RunOutcome, RunSummary, total_size};

/// Deletes every listed artifact of one repository, one call at a time.
#[derive(Debug)]
pub struct Cleaner<'a, R: Reporter> {
    client: GithubClient,
    reporter: &'a R,
}

impl<'a, R: Reporter> Cleaner<'a, R> {
    /// Create a cleaner authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::Network`] if the HTTP client cannot be built.
    pub fn new(
        config: SweepConfig,
        token: impl Into<String>,
        reporter: &'a R,
    ) -> Result<Self, CleanError> {
        Ok(Self {
            client: GithubClient::new(config, token)?,
            reporter,
        })
    }

    /// Fetch one page of artifacts, in service order.
    ///
    /// # Errors
    ///
    /// Propagates listing failures; see [`GithubClient::list_artifacts`].
    pub async fn list(&self) -> Result<Vec<Artifact>, CleanError> {
        self.reporter.listing(&self.client.config().repo);
        let page = self.client.list_artifacts().await?;

        self.reporter.found(page.artifacts.len());
        let remaining = page.remaining();
        if remaining > 0 {
            tracing::info!("{remaining} artifacts are beyond the first page and will be kept");
            self.reporter.truncated(remaining);
        }
        Ok(page.artifacts)
    }

    /// Report one line per artifact plus the total, and return the total in bytes.
    pub fn summarize(&self, artifacts: &[Artifact]) -> u64 {
        for (i, artifact) in artifacts.iter().enumerate() {
            self.reporter.artifact(i + 1, artifact);
        }
        let total = total_size(artifacts);
        self.reporter.total(total);
        total
    }

    /// Issue one delete per artifact, pausing between calls.
    ///
    /// Failures are reported and counted; the loop always runs to the end.
    pub async fn delete_all(&self, artifacts: &[Artifact]) -> RunSummary {
        let count = artifacts.len();
        let delay = self.client.config().delete_delay;
        let mut summary = RunSummary {
            total_bytes: total_size(artifacts),
            ..RunSummary::default()
        };

        self.reporter.deleting(count);
        for (i, artifact) in artifacts.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            summary.attempted += 1;
            match self.client.delete_artifact(artifact.id).await {
                Ok(()) => {
                    summary.deleted += 1;
                    summary.freed_bytes += artifact.size_in_bytes;
                    self.reporter.deleted(i + 1, count, artifact);
                }
                Err(e) => {
                    tracing::warn!("failed to delete {} ({}): {e}", artifact.name, artifact.id);
                    summary.failed += 1;
                    self.reporter.delete_failed(i + 1, count, artifact, &e);
                }
            }
        }

        self.reporter.summary(&summary);
        summary
    }

    /// List, summarize and delete.
    ///
    /// # Errors
    ///
    /// Fails only when the listing fails; no delete call is made in that case.
    pub async fn run(&self) -> Result<RunOutcome, CleanError> {
        let artifacts = self.list().await?;
        if artifacts.is_empty() {
            return Ok(RunOutcome::Empty);
        }

        self.summarize(&artifacts);
        let summary = self.delete_all(&artifacts).await;
        Ok(RunOutcome::Completed(summary))
    }
}
