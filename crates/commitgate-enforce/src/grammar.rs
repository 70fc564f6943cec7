//! Conventional-commit subject parsing.
//!
//! Elements are checked left to right and the first failing one is reported,
//! so a diagnostic always names a single grammar element.

use commitgate_core::config::GateConfig;

use crate::types::{ConventionalSubject, Violation, ViolationCode};

const LAYOUT_HINT: &str = "expected '<type>(<scope>): <description>', e.g. 'feat(auth): add login flow'";

/// First line of a commit message with trailing whitespace removed.
pub fn subject_line(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim_end()
}

/// Parse `subject` into its conventional-commit parts, validating the type and
/// scope against `config`.
pub fn parse_subject(subject: &str, config: &GateConfig) -> Result<ConventionalSubject, Violation> {
    if subject.trim().is_empty() {
        return Err(Violation::new(ViolationCode::C001, "empty commit subject")
            .with_hint(LAYOUT_HINT));
    }

    // Without any ':' the separator is the missing element, whatever precedes it.
    if !subject.contains(':') {
        return Err(Violation::new(
            ViolationCode::C003,
            "missing type and ':' separator: subject has no ':' after a commit type",
        )
        .with_hint(LAYOUT_HINT));
    }

    let type_end = subject
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(subject.len());
    let commit_type = &subject[..type_end];
    if commit_type.is_empty() {
        return Err(Violation::new(
            ViolationCode::C002,
            "missing type: subject must start with a commit type such as 'feat' or 'fix'",
        )
        .with_hint(LAYOUT_HINT));
    }

    let mut rest = &subject[type_end..];

    let scope = match rest.strip_prefix('(') {
        Some(after_paren) => {
            let close = after_paren.find(')').ok_or_else(|| {
                Violation::new(ViolationCode::C005, "malformed scope: missing closing ')'")
                    .with_hint(LAYOUT_HINT)
            })?;
            let scope = &after_paren[..close];
            if scope.is_empty() {
                return Err(Violation::new(ViolationCode::C005, "malformed scope: '()' is empty")
                    .with_hint("drop the parentheses or name a scope, e.g. 'fix(auth): ...'"));
            }
            if scope.chars().any(char::is_whitespace) {
                return Err(Violation::new(
                    ViolationCode::C005,
                    format!("malformed scope: '{scope}' contains whitespace"),
                )
                .with_hint("use a single word scope such as 'auth' or 'api-client'"));
            }
            rest = &after_paren[close + 1..];
            Some(scope)
        }
        None => None,
    };

    let breaking = match rest.strip_prefix('!') {
        Some(after_bang) => {
            rest = after_bang;
            true
        }
        None => false,
    };

    let raw_description = rest.strip_prefix(':').ok_or_else(|| {
        Violation::new(
            ViolationCode::C003,
            format!("missing type or ':' separator: '{commit_type}' is not followed by ':'"),
        )
        .with_hint(LAYOUT_HINT)
    })?;

    if !config.is_allowed_type(commit_type) {
        return Err(Violation::new(
            ViolationCode::C004,
            format!(
                "unknown type '{commit_type}'; allowed types: {}",
                config.types.join(", ")
            ),
        )
        .with_hint(suggest_type(commit_type, config).map_or_else(
            || format!("use one of: {}", config.types.join(", ")),
            |t| format!("did you mean '{t}'?"),
        )));
    }

    if let Some(scope) = scope {
        if !config.is_allowed_scope(scope) {
            return Err(Violation::new(
                ViolationCode::C005,
                format!(
                    "scope '{scope}' is not allowed; allowed scopes: {}",
                    config.scopes.join(", ")
                ),
            ));
        }
    }

    if raw_description.trim().is_empty() {
        return Err(Violation::new(
            ViolationCode::C007,
            "empty description after ':' separator",
        )
        .with_hint(format!("describe the change, e.g. '{commit_type}: add login flow'")));
    }

    let description = match raw_description.strip_prefix(' ') {
        Some(d) if !d.starts_with(char::is_whitespace) => d,
        _ => {
            let header = &subject[..subject.len() - raw_description.len() - 1];
            return Err(Violation::new(
                ViolationCode::C006,
                "missing space after ':' separator: expected exactly one space before the description",
            )
            .with_hint(format!("{header}: {}", raw_description.trim())));
        }
    };

    Ok(ConventionalSubject {
        commit_type: commit_type.to_string(),
        scope: scope.map(str::to_string),
        breaking,
        description: description.to_string(),
    })
}

/// Case-insensitive match against the allowed types, for "did you mean" hints.
fn suggest_type<'a>(commit_type: &str, config: &'a GateConfig) -> Option<&'a str> {
    config
        .types
        .iter()
        .find(|t| t.eq_ignore_ascii_case(commit_type))
        .map(String::as_str)
}
