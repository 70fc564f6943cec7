use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pull-request lifecycle action that triggered the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Opened,
    Reopened,
    Synchronize,
    Closed,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Opened,
        EventKind::Reopened,
        EventKind::Synchronize,
        EventKind::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Opened => "opened",
            EventKind::Reopened => "reopened",
            EventKind::Synchronize => "synchronize",
            EventKind::Closed => "closed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "opened" => Ok(EventKind::Opened),
            "reopened" => Ok(EventKind::Reopened),
            "synchronize" => Ok(EventKind::Synchronize),
            "closed" => Ok(EventKind::Closed),
            other => Err(GateError::UnknownEventKind(other.to_string())),
        }
    }
}

/// A single pull-request state change, as handed over by the CI platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    kind: EventKind,
    head_commit_subject: String,
}

impl PullRequestEvent {
    pub fn new(kind: EventKind, head_commit_subject: impl Into<String>) -> Self {
        Self {
            kind,
            head_commit_subject: head_commit_subject.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn head_commit_subject(&self) -> &str {
        &self.head_commit_subject
    }
}

/// Process exit status reported to the CI platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Check passed, or the event kind does not need a check.
    Success,
    /// Subject violates the commit convention.
    PolicyViolation,
    /// Subject, event kind, or configuration could not be determined.
    InputError,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::PolicyViolation => 1,
            ExitStatus::InputError => 2,
        }
    }
}

/// Errors that prevent the gate from reaching a verdict.
///
/// A subject that breaks the convention is not an error; it is a failed
/// `CheckResult`. Every variant here maps to [`ExitStatus::InputError`].
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    #[error("no commit subject available: {0}")]
    InputUnavailable(String),

    #[error("unknown pull-request event kind '{0}' (expected one of: opened, reopened, synchronize, closed)")]
    UnknownEventKind(String),

    #[error("invalid event payload {path}: {reason}")]
    EventPayload { path: String, reason: String },

    #[error("git failed to read commit subject for '{rev}': {reason}")]
    Git { rev: String, reason: String },

    #[error("invalid configuration {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GateError {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::InputError
    }
}
