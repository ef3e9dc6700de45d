//! gha-sweep core - list and delete GitHub Actions artifacts
//!
//! A [`Cleaner`] fetches one page of a repository's artifacts, reports the
//! inventory through a [`Reporter`], then deletes each artifact in turn.
//! Deletion failures are counted, never fatal; only a failed listing aborts
//! a run.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod github;
pub mod repo;
pub mod reporter;
pub mod types;

pub use cleaner::Cleaner;
pub use config::SweepConfig;
pub use error::{CleanError, DeleteError};
pub use repo::GitHubRepo;
pub use reporter::{NullReporter, Reporter};
pub use types::{Artifact, ArtifactId, RunOutcome, RunSummary, format_mb, total_size};

/// User Agent string sent with every request
pub const USER_AGENT: &str = concat!("gha-sweep/", env!("CARGO_PKG_VERSION"));
