use super::*;

#[test]
fn default_config_fails_closed() {
    let config = GateConfig::default();
    assert_eq!(config.failure_policy, FailurePolicy::FailClosed);
    assert_eq!(config.login_url, "/login");
}

#[test]
fn from_meta_without_tag_is_default() {
    assert_eq!(GateConfig::from_meta(None), GateConfig::default());
}

#[test]
fn from_meta_reads_policy() {
    assert_eq!(GateConfig::from_meta(Some("fail_open")).failure_policy, FailurePolicy::FailOpen);
    assert_eq!(GateConfig::from_meta(Some("hold")).failure_policy, FailurePolicy::Hold);
}

#[test]
fn from_meta_ignores_bad_policy() {
    assert_eq!(GateConfig::from_meta(Some("maybe")), GateConfig::default());
}

#[test]
fn policy_round_trips_through_meta() {
    for policy in [FailurePolicy::FailClosed, FailurePolicy::FailOpen, FailurePolicy::Hold] {
        assert_eq!(GateConfig::from_meta(Some(policy.as_str())).failure_policy, policy);
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_is_default_outside_browser() {
    assert_eq!(GateConfig::from_document(), GateConfig::default());
}
