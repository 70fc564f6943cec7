// Gate behavior under non-default configuration

use commitgate_core::config::GateConfig;
use commitgate_enforce::gate::CommitMessageGate;
use commitgate_enforce::types::ViolationCode;

#[test]
fn test_configured_vocabulary_replaces_defaults() {
    let gate = CommitMessageGate::new(GateConfig::default().with_types(["feature", "bugfix"]));
    assert!(gate.check("bugfix: close the leak").passed);
    let result = gate.check("fix: close the leak");
    assert_eq!(result.violations[0].code, ViolationCode::C004);
    assert!(result.message.contains("feature, bugfix"));
}

#[test]
fn test_scope_allow_list() {
    let gate = CommitMessageGate::new(GateConfig {
        scopes: vec!["api".to_string(), "cli".to_string()],
        ..GateConfig::default()
    });
    assert!(gate.check("feat(cli): add --json").passed);
    assert!(gate.check("feat: unscoped is fine").passed);
    assert_eq!(
        gate.check("feat(web): nope").violations[0].code,
        ViolationCode::C005
    );
}

#[test]
fn test_header_limit() {
    let gate = CommitMessageGate::new(GateConfig {
        max_header_length: 20,
        ..GateConfig::default()
    });
    assert!(gate.check("fix: twenty chars ok").passed);
    assert_eq!(
        gate.check("fix: twenty-one chars").violations[0].code,
        ViolationCode::C008
    );
}

#[test]
fn test_config_is_shared_by_clones() {
    let gate = CommitMessageGate::new(GateConfig::default().with_types(["ops"]));
    let clone = gate.clone();
    assert_eq!(gate.config(), clone.config());
    assert!(clone.check("ops: rotate certificates").passed);
}
