use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_key_is_set() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "TEST_KEY"), ("TEST_KEY", "secret")])).unwrap();
    assert_eq!(cfg.api_key, "secret");
    assert_eq!(cfg.model, DEFAULT_LLM_MODEL);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn overrides_are_parsed() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "ANTHROPIC_API_KEY"),
        ("ANTHROPIC_API_KEY", "sk-ant"),
        ("LLM_MODEL", "claude-haiku"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.model, "claude-haiku");
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn invalid_timeouts_fall_back_to_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "K"),
        ("K", "v"),
        ("LLM_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}

#[test]
fn missing_key_indirection_is_an_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "LLM_API_KEY_ENV"));
}

#[test]
fn missing_or_blank_key_value_is_an_error() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "K")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { var } if var == "K"));

    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "K"), ("K", "  ")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}
