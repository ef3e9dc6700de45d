//! gha-sweep - delete every GitHub Actions artifact of a repository
//!
//! Frees the Actions storage quota by listing the repository's artifacts,
//! printing their sizes and deleting them one by one.

pub mod cmd;
pub mod ui;

use clap::Parser;

const TOKEN_HELP: &str = "\
Getting a GitHub token:
  1. Visit https://github.com/settings/tokens
  2. Click 'Generate new token (classic)'
  3. Select the scopes: repo, workflow
  4. Copy the generated token

Then run: gha-sweep YOUR_TOKEN";

/// Command line of `gha-sweep`: exactly one positional credential.
#[derive(Debug, Parser)]
#[command(name = "gha-sweep")]
#[command(
    author,
    version,
    about = "Delete all GitHub Actions artifacts of a repository to free storage quota"
)]
#[command(after_help = TOKEN_HELP)]
pub struct Cli {
    /// GitHub personal access token used as the bearer credential
    #[arg(value_name = "GITHUB_TOKEN")]
    pub token: String,
}
