use commitgate_core::types::GateError;
use commitgate_enforce::types::{CheckResult, GateOutcome, Violation};

use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_outcome(&self, _outcome: &GateOutcome) -> String {
        String::new() // Passing or skipped gate = empty stdout
    }

    fn format_diagnostics(&self, result: &CheckResult) -> String {
        if result.passed {
            return String::new();
        }

        let mut out = format!(
            "commit subject does not follow the conventional commit format\n  subject: {:?}\n",
            result.subject
        );
        for v in &result.violations {
            out.push_str(&format_violation_human(v));
        }
        out
    }

    fn format_error(&self, _error: &GateError) -> String {
        String::new()
    }
}

fn format_violation_human(v: &Violation) -> String {
    let mut out = format!("  {} {}\n", v.code, v.message);
    if let Some(hint) = &v.fix_hint {
        out.push_str(&format!("    hint: {}\n", hint));
    }
    out
}
