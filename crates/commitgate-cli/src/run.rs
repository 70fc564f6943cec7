//! Top-level orchestration: resolve inputs, evaluate the gate, report.

use commitgate_core::config::GateConfig;
use commitgate_core::types::{GateError, PullRequestEvent};
use commitgate_enforce::gate::CommitMessageGate;
use commitgate_enforce::types::GateOutcome;
use commitgate_output::OutputFormatter;

use crate::cli_args::Cli;
use crate::input;

/// Run the check and return the process exit code.
pub(crate) fn run(formatter: &dyn OutputFormatter, cli: &Cli) -> i32 {
    match execute(cli) {
        Ok(outcome) => {
            if let GateOutcome::Checked(result) = &outcome {
                if !result.passed {
                    eprint!("{}", formatter.format_diagnostics(result));
                }
            }
            let output = formatter.format_outcome(&outcome);
            if !output.is_empty() {
                println!("{}", output);
            }
            outcome.exit_status().code()
        }
        Err(e) => {
            eprintln!("check-commit-message: error: {}", e);
            let output = formatter.format_error(&e);
            if !output.is_empty() {
                println!("{}", output);
            }
            e.exit_status().code()
        }
    }
}

fn execute(cli: &Cli) -> Result<GateOutcome, GateError> {
    let gate = CommitMessageGate::new(load_config(cli)?);

    let kind = input::resolve_event_kind(cli.event.as_deref(), cli.event_path.as_deref())?;
    if let Some(kind) = kind {
        if !gate.should_run(kind) {
            // Subject is never read for skipped events.
            return Ok(gate.evaluate(&PullRequestEvent::new(kind, String::new())));
        }
    }

    let subject = input::resolve_subject(cli.message.as_deref(), cli.from_git.as_deref())?;
    let outcome = match kind {
        Some(kind) => gate.evaluate(&PullRequestEvent::new(kind, subject)),
        None => GateOutcome::Checked(gate.check(&subject)),
    };
    Ok(outcome)
}

fn load_config(cli: &Cli) -> Result<GateConfig, GateError> {
    let config = match &cli.config {
        Some(path) => GateConfig::load(path)?,
        None => GateConfig::discover(&std::env::current_dir()?)?,
    };
    let Some(types) = &cli.types else {
        return Ok(config);
    };
    let config = config.with_types(types.iter().map(String::as_str));
    config.validate().map_err(|reason| GateError::Config {
        path: "--types".to_string(),
        reason,
    })?;
    Ok(config)
}
