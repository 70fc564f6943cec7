use std::fmt;

use commitgate_core::types::{EventKind, ExitStatus};
use serde::{Deserialize, Serialize};

/// Stable diagnostic codes, one per grammar element that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationCode {
    C001,
    C002,
    C003,
    C004,
    C005,
    C006,
    C007,
    C008,
}

impl ViolationCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::C001 => "C001",
            ViolationCode::C002 => "C002",
            ViolationCode::C003 => "C003",
            ViolationCode::C004 => "C004",
            ViolationCode::C005 => "C005",
            ViolationCode::C006 => "C006",
            ViolationCode::C007 => "C007",
            ViolationCode::C008 => "C008",
        }
    }

    /// The part of the subject this code is about.
    pub fn element(&self) -> GrammarElement {
        match self {
            ViolationCode::C001 => GrammarElement::Subject,
            ViolationCode::C002 | ViolationCode::C004 => GrammarElement::Type,
            ViolationCode::C005 => GrammarElement::Scope,
            ViolationCode::C003 | ViolationCode::C006 => GrammarElement::Separator,
            ViolationCode::C007 => GrammarElement::Description,
            ViolationCode::C008 => GrammarElement::Header,
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarElement {
    Subject,
    Type,
    Scope,
    Separator,
    Description,
    Header,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: ViolationCode,
    pub element: GrammarElement,
    pub message: String,
    pub fix_hint: Option<String>,
}

impl Violation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            element: code.element(),
            message: message.into(),
            fix_hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.fix_hint = Some(hint.into());
        self
    }
}

/// The parts of a subject that matched the conventional-commit layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionalSubject {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub scope: Option<String>,
    pub breaking: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub subject: String,
    pub passed: bool,
    pub message: String,
    pub violations: Vec<Violation>,
    pub parsed: Option<ConventionalSubject>,
}

impl CheckResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.passed {
            ExitStatus::Success
        } else {
            ExitStatus::PolicyViolation
        }
    }
}

/// What the gate decided for one pull-request event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum GateOutcome {
    /// The event kind does not need a check; the subject was never evaluated.
    Skipped { kind: EventKind },
    Checked(CheckResult),
}

impl GateOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            GateOutcome::Skipped { .. } => ExitStatus::Success,
            GateOutcome::Checked(result) => result.exit_status(),
        }
    }
}
