//! Reporter trait for dependency injection
//!
//! The cleaner reports what it finds and does through this trait so it is not
//! coupled to a specific terminal implementation.

use crate::error::DeleteError;
use crate::repo::GitHubRepo;
use crate::types::{Artifact, RunSummary};

/// Receives progress events from a [`Cleaner`](crate::Cleaner) run.
pub trait Reporter: Send + Sync {
    /// The listing call is about to be made.
    fn listing(&self, repo: &GitHubRepo);

    /// The listing returned `count` artifacts.
    fn found(&self, count: usize);

    /// More artifacts exist than fit on the single page fetched.
    fn truncated(&self, remaining: u64);

    /// One inventory line; `index` is 1-based.
    fn artifact(&self, index: usize, artifact: &Artifact);

    /// Aggregate size of the inventory.
    fn total(&self, bytes: u64);

    /// Deletion of `count` artifacts is starting.
    fn deleting(&self, count: usize);

    /// Artifact `index` of `count` was deleted.
    fn deleted(&self, index: usize, count: usize, artifact: &Artifact);

    /// Artifact `index` of `count` could not be deleted.
    fn delete_failed(&self, index: usize, count: usize, artifact: &Artifact, err: &DeleteError);

    /// Final counters of the deletion pass.
    fn summary(&self, summary: &RunSummary);
}

/// A no-op reporter for silent operations (e.g. embedding, testing).
#[derive(Debug, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn listing(&self, _: &GitHubRepo) {}
    fn found(&self, _: usize) {}
    fn truncated(&self, _: u64) {}
    fn artifact(&self, _: usize, _: &Artifact) {}
    fn total(&self, _: u64) {}
    fn deleting(&self, _: usize) {}
    fn deleted(&self, _: usize, _: usize, _: &Artifact) {}
    fn delete_failed(&self, _: usize, _: usize, _: &Artifact, _: &DeleteError) {}
    fn summary(&self, _: &RunSummary) {}
}
