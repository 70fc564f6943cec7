//! commitgate CLI — conventional-commit subject gate for pull requests.
//!
//! This binary provides the `check-commit-message` command. It exits 0 when
//! the subject passes or the event needs no check, 1 when the subject breaks
//! the convention, and 2 when the subject, event, or configuration could not
//! be determined. See `check-commit-message --help` for usage.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli_args;
mod input;
mod run;

use cli_args::Cli;

fn main() {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for --json output.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let formatter: Box<dyn commitgate_output::OutputFormatter> = if cli.json {
        Box::new(commitgate_output::json::JsonFormatter)
    } else {
        Box::new(commitgate_output::human::HumanFormatter)
    };

    let exit_code = run::run(&*formatter, &cli);
    std::process::exit(exit_code);
}
