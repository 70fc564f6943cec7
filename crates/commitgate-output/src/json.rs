use commitgate_core::types::GateError;
use commitgate_enforce::types::{CheckResult, GateOutcome};
use serde::Serialize;

use crate::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct ErrorRecord<'a> {
    outcome: &'static str,
    exit_code: i32,
    message: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format_outcome(&self, outcome: &GateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_default()
    }

    fn format_diagnostics(&self, result: &CheckResult) -> String {
        if result.passed {
            return String::new();
        }
        result
            .violations
            .iter()
            .map(|v| format!("{} {}\n", v.code, v.message))
            .collect()
    }

    fn format_error(&self, error: &GateError) -> String {
        let message = error.to_string();
        let record = ErrorRecord {
            outcome: "error",
            exit_code: error.exit_status().code(),
            message: &message,
        };
        serde_json::to_string_pretty(&record).unwrap_or_default()
    }
}
