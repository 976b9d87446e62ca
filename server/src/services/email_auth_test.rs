use super::*;

#[test]
fn normalize_email_lowercases_and_trims() {
    assert_eq!(normalize_email("  Ada@Example.COM "), Some("ada@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_malformed_addresses() {
    for raw in ["", "ada", "@example.com", "ada@", "a@b@c"] {
        assert_eq!(normalize_email(raw), None, "expected rejection for {raw:?}");
    }
}

#[test]
fn normalize_code_uppercases_valid_codes() {
    assert_eq!(normalize_code(" abc234 "), Some("ABC234".to_owned()));
}

#[test]
fn normalize_code_rejects_ambiguous_or_wrong_length() {
    assert_eq!(normalize_code("ABC23"), None);
    assert_eq!(normalize_code("ABC2345"), None);
    // 1, I, 0 and O are excluded from the alphabet.
    assert_eq!(normalize_code("ABC1I0"), None);
    assert_eq!(normalize_code("ABC23!"), None);
}

#[test]
fn generated_codes_round_trip_through_normalize() {
    for _ in 0..20 {
        let code = generate_access_code();
        assert_eq!(code.len(), CODE_LEN);
        assert_eq!(normalize_code(&code), Some(code.clone()));
    }
}

#[test]
fn hash_access_code_is_hex_sha256() {
    let hash = hash_access_code("ABC234");
    assert_eq!(hash.len(), 64);
    assert_eq!(hash, hash_access_code("ABC234"));
    assert_ne!(hash, hash_access_code("ABC235"));
}

#[test]
fn display_name_uses_local_part() {
    assert_eq!(display_name_for("ada@example.com"), "ada");
}

#[test]
fn render_access_code_email_fills_placeholders() {
    let html = render_access_code_email("ada@example.com", "XYZ789");
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("XYZ789"));
    assert!(!html.contains("{{EMAIL}}"));
    assert!(!html.contains("{{CODE}}"));
}
