use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "check-commit-message",
    version,
    about = "Check that a pull request's head commit subject follows the conventional commit format"
)]
pub(crate) struct Cli {
    /// Commit subject to check (stdin is read when no source is given)
    #[arg(long, short = 'm', conflicts_with = "from_git")]
    pub message: Option<String>,

    /// Read the subject of a git revision instead
    #[arg(long, value_name = "REV", num_args = 0..=1, default_missing_value = "HEAD")]
    pub from_git: Option<String>,

    /// Pull-request event kind: opened, reopened, synchronize, closed
    #[arg(long, env = "COMMITGATE_EVENT")]
    pub event: Option<String>,

    /// Webhook payload whose `action` field is the event kind
    #[arg(long, value_name = "FILE", env = "GITHUB_EVENT_PATH")]
    pub event_path: Option<PathBuf>,

    /// Configuration file (default: ./.commitgate.json if present)
    #[arg(long, value_name = "FILE", env = "COMMITGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Comma-separated allowed commit types, overriding the configuration
    #[arg(long, value_delimiter = ',')]
    pub types: Option<Vec<String>>,

    /// Output the gate outcome as structured JSON
    #[arg(long)]
    pub json: bool,

    /// Log input resolution and verdict details to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_args_tests.rs"]
mod tests;
