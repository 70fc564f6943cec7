//! Output formatters for commitgate results.
//!
//! Provides two output modes:
//! - **Human** (default): silent on success, diagnostics on failure
//! - **JSON** (`--json`): Machine-readable gate outcome on stdout

pub mod human;
pub mod json;

use commitgate_core::types::GateError;
use commitgate_enforce::types::{CheckResult, GateOutcome};

pub trait OutputFormatter {
    /// Text for stdout after the gate reached a verdict. May be empty.
    fn format_outcome(&self, outcome: &GateOutcome) -> String;
    /// Text for stderr explaining a failed check.
    fn format_diagnostics(&self, result: &CheckResult) -> String;
    /// Text for stdout when no verdict could be reached. May be empty.
    fn format_error(&self, error: &GateError) -> String;
}
