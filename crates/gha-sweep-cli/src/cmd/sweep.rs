//! Sweep command: list, print and delete every artifact

use anyhow::Result;
use gha_sweep_core::{CleanError, Cleaner, RunOutcome, SweepConfig};

use crate::ui::Output;

/// Sweep the default repository with `token`.
///
/// Listing and deletion failures are printed, not returned.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn sweep(token: &str) -> Result<()> {
    sweep_with(SweepConfig::default(), token).await.map(|_| ())
}

/// Sweep the repository described by `config` and print the verdict.
///
/// Returns the run outcome, or `None` when the listing failed.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub async fn sweep_with(config: SweepConfig, token: &str) -> Result<Option<RunOutcome>> {
    let output = Output::new();
    output.banner();

    let cleaner = Cleaner::new(config, token, &output)?;
    match cleaner.run().await {
        Ok(outcome) => {
            report_outcome(&output, &outcome);
            Ok(Some(outcome))
        }
        Err(err) => {
            report_failure(&output, &err);
            Ok(None)
        }
    }
}

fn report_outcome(output: &Output, outcome: &RunOutcome) {
    println!();
    if outcome.is_success() {
        output.success("Cleanup complete. GitHub Actions can run again.");
        if outcome.summary().is_some() {
            output.info("Allow 5-10 minutes for GitHub to refresh the storage quota.");
        }
    } else {
        output.error("Cleanup failed: check the token permissions or delete the artifacts manually.");
    }
}

fn report_failure(output: &Output, err: &CleanError) {
    tracing::debug!("listing failed: {err:?}");
    output.error(&format!("Error: {err}"));
    println!();
    if err.is_auth() {
        output.error("The token was rejected: it needs the repo and workflow scopes.");
    } else {
        output.error("Cleanup failed: check the token permissions or delete the artifacts manually.");
    }
}
