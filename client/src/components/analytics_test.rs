use super::*;

#[test]
fn resolve_src_defaults_to_hosted_script() {
    assert_eq!(resolve_src(None), DEFAULT_ANALYTICS_SRC);
}

#[test]
fn resolve_src_ignores_blank_override() {
    assert_eq!(resolve_src(Some("   ".to_owned())), DEFAULT_ANALYTICS_SRC);
}

#[test]
fn resolve_src_keeps_override() {
    assert_eq!(resolve_src(Some("/insights.js".to_owned())), "/insights.js");
}

#[test]
fn bootstrap_defines_queueing_shim() {
    assert!(ANALYTICS_BOOTSTRAP.starts_with("window.si = window.si ||"));
    assert!(ANALYTICS_BOOTSTRAP.contains("window.siq"));
}
