//! The pull-request commit subject gate.

use commitgate_core::config::GateConfig;
use commitgate_core::types::{EventKind, PullRequestEvent};

use crate::grammar::{parse_subject, subject_line};
use crate::types::{CheckResult, GateOutcome, Violation, ViolationCode};

const PASS_MESSAGE: &str = "commit subject follows the conventional commit format";

/// Decides, per pull-request event, whether the head commit subject needs
/// checking and whether it satisfies the configured convention.
///
/// Holds only immutable configuration; every method is a pure function of
/// its arguments.
#[derive(Debug, Clone, Default)]
pub struct CommitMessageGate {
    config: GateConfig,
}

impl CommitMessageGate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Closing a pull request never re-validates its subject.
    pub fn should_run(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Opened | EventKind::Reopened | EventKind::Synchronize => true,
            EventKind::Closed => false,
        }
    }

    /// Validate a commit subject. Only the first line of `subject` is considered.
    pub fn check(&self, subject: &str) -> CheckResult {
        let subject = subject_line(subject);
        let mut violations = Vec::new();

        let parsed = match parse_subject(subject, &self.config) {
            Ok(parsed) => Some(parsed),
            Err(violation) => {
                violations.push(violation);
                None
            }
        };

        if let Some(v) = self.check_header_length(subject) {
            violations.push(v);
        }

        let passed = violations.is_empty();
        let message = if passed {
            PASS_MESSAGE.to_string()
        } else {
            violations
                .iter()
                .map(|v| v.message.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        };

        tracing::debug!(
            subject,
            passed,
            codes = ?violations.iter().map(|v| v.code.as_str()).collect::<Vec<_>>(),
            "checked commit subject"
        );

        CheckResult {
            subject: subject.to_string(),
            passed,
            message,
            violations,
            parsed,
        }
    }

    /// Run the gate for one event. `check` is not invoked for skipped kinds.
    pub fn evaluate(&self, event: &PullRequestEvent) -> GateOutcome {
        let kind = event.kind();
        if !self.should_run(kind) {
            tracing::info!(%kind, "event kind does not require a commit subject check");
            return GateOutcome::Skipped { kind };
        }
        GateOutcome::Checked(self.check(event.head_commit_subject()))
    }

    fn check_header_length(&self, subject: &str) -> Option<Violation> {
        let limit = self.config.max_header_length;
        let len = subject.chars().count();
        if limit == 0 || len <= limit {
            return None;
        }
        Some(
            Violation::new(
                ViolationCode::C008,
                format!("subject is {len} characters long, exceeding the limit of {limit}"),
            )
            .with_hint("move details into the commit body"),
        )
    }
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
