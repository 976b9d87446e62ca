use super::*;

#[test]
fn report_path_trims_token() {
    assert_eq!(report_path("  s-17 "), Some("/reports/s-17".to_owned()));
}

#[test]
fn report_path_escapes_reserved_characters() {
    assert_eq!(report_path("team/42?x#y"), Some("/reports/team%2F42%3Fx%23y".to_owned()));
}

#[test]
fn report_path_rejects_blank_token() {
    assert_eq!(report_path("   "), None);
}

#[test]
fn catalog_is_closed_to_viewers() {
    assert!(!CATALOG_ROLES.contains(&Role::Viewer));
    assert!(CATALOG_ROLES.contains(&Role::Admin));
}
