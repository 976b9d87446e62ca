use super::*;

#[test]
fn report_endpoint_formats_expected_path() {
    assert_eq!(report_endpoint("s-42"), "/api/reports/s-42");
}

#[test]
fn report_endpoint_escapes_token_separators() {
    assert_eq!(report_endpoint("a/b"), "/api/reports/a%2Fb");
}

#[test]
fn failure_message_prefers_server_envelope() {
    let body = r#"{"success":false,"error":"Failed to fetch subcategories"}"#;
    assert_eq!(failure_message("subcategory fetch", 500, Some(body)), "Failed to fetch subcategories");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message("request code", 429, None), "request code failed: 429");
    assert_eq!(failure_message("report fetch", 502, Some("<html>bad gateway</html>")), "report fetch failed: 502");
    assert_eq!(
        failure_message("verify code", 400, Some(r#"{"success":false,"error":""}"#)),
        "verify code failed: 400"
    );
}
