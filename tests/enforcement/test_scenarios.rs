// Gate behavior for the documented pull-request scenarios

use commitgate_core::types::{EventKind, PullRequestEvent};
use commitgate_enforce::gate::CommitMessageGate;
use commitgate_enforce::types::{GateOutcome, GrammarElement, ViolationCode};

fn checked(kind: EventKind, subject: &str) -> commitgate_enforce::types::CheckResult {
    match CommitMessageGate::default().evaluate(&PullRequestEvent::new(kind, subject)) {
        GateOutcome::Checked(result) => result,
        other => panic!("expected a check for {kind}, got {other:?}"),
    }
}

#[test]
fn test_feature_subject_passes() {
    let result = checked(EventKind::Opened, "feat: add login flow");
    assert!(result.passed);
}

#[test]
fn test_scoped_fix_passes() {
    let result = checked(EventKind::Synchronize, "fix(auth): handle expired token");
    assert!(result.passed);
}

#[test]
fn test_plain_sentence_fails_on_separator() {
    let result = checked(EventKind::Reopened, "update stuff");
    assert!(!result.passed);
    assert_eq!(result.violations[0].element, GrammarElement::Separator);
    assert!(result.message.contains("':'"));
}

#[test]
fn test_bare_type_fails_on_description() {
    let result = checked(EventKind::Opened, "feat:");
    assert!(!result.passed);
    assert_eq!(result.violations[0].code, ViolationCode::C007);
}

#[test]
fn test_closed_skips_any_subject() {
    let gate = CommitMessageGate::default();
    for subject in ["feat: add login flow", "update stuff", "", "feat:"] {
        let outcome = gate.evaluate(&PullRequestEvent::new(EventKind::Closed, subject));
        assert_eq!(outcome, GateOutcome::Skipped { kind: EventKind::Closed });
        assert_eq!(outcome.exit_status().code(), 0);
    }
}

#[test]
fn test_should_run_matches_evaluate() {
    let gate = CommitMessageGate::default();
    for kind in EventKind::ALL {
        let outcome = gate.evaluate(&PullRequestEvent::new(kind, "feat: x"));
        let skipped = matches!(outcome, GateOutcome::Skipped { .. });
        assert_eq!(gate.should_run(kind), !skipped, "{kind}");
    }
}

#[test]
fn test_any_missing_colon_mentions_separator() {
    let gate = CommitMessageGate::default();
    for subject in [
        "feat add thing",
        "fix(auth) token",
        "docs!",
        "chore bump deps",
        "- update stuff",
        "123 bump deps",
        "[WIP] update stuff",
        "fix(auth handle token",
    ] {
        let result = gate.check(subject);
        assert!(!result.passed, "{subject}");
        assert!(result.message.contains("separator"), "{subject}: {}", result.message);
    }
}

#[test]
fn test_any_empty_description_fails() {
    let gate = CommitMessageGate::default();
    for subject in ["feat:", "fix(auth):", "docs!:", "chore: ", "test:\t"] {
        let result = gate.check(subject);
        assert!(!result.passed, "{subject}");
        assert_eq!(result.violations[0].code, ViolationCode::C007, "{subject}");
    }
}

#[test]
fn test_check_is_deterministic_across_gates() {
    let a = CommitMessageGate::default();
    let b = CommitMessageGate::default();
    for subject in ["feat: add login flow", "update stuff", "Feat: x", "fix():"] {
        assert_eq!(a.check(subject), b.check(subject));
        assert_eq!(a.check(subject), a.check(subject));
    }
}
