use super::*;

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE", " Off "] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_other_values() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// env_bool uses unique env var names to avoid races with parallel tests.
#[test]
fn env_bool_reads_variable() {
    let key = "__TEST_CFG_ENV_BOOL_4471__";
    unsafe { std::env::set_var(key, "on") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool(key), None);
}

// =============================================================================
// Capabilities
// =============================================================================

#[test]
fn capabilities_default_to_disabled() {
    let caps = Capabilities::default();
    assert!(!caps.is_enabled(Capability::ReportInit));
    assert!(!caps.is_enabled(Capability::AiAnalysis));
}

#[test]
fn capabilities_are_independent() {
    let caps = Capabilities { report_init: true, ai_analysis: false };
    assert!(caps.is_enabled(Capability::ReportInit));
    assert!(!caps.is_enabled(Capability::AiAnalysis));
}

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset() {
    assert_eq!(parse_port(None).unwrap(), 3000);
}

#[test]
fn parse_port_accepts_valid_value() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}
