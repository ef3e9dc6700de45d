//! gha-sweep - GitHub Actions artifact sweeper

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gha_sweep_cli::Cli;
use gha_sweep_cli::cmd;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Missing or extra arguments exit here with usage text, before any request.
    let cli = Cli::parse();

    cmd::sweep::sweep(&cli.token).await
}
