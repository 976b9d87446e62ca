use super::*;
use uuid::Uuid;

fn user(role: Role) -> User {
    User { id: Uuid::new_v4(), name: "Grace".to_owned(), email: Some("grace@example.com".to_owned()), role }
}

// =============================================================
// AuthState lifecycle
// =============================================================

#[test]
fn auth_state_default_no_user_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_is_loading_and_unauthenticated() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_ne!(state, AuthState::resolved(None));
}

#[test]
fn resolved_with_user_is_authenticated() {
    let state = AuthState::resolved(Some(user(Role::Recruiter)));
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Recruiter));
}

#[test]
fn begin_refresh_keeps_user_until_replaced() {
    let mut state = AuthState::resolved(Some(user(Role::Admin)));
    state.begin_refresh();
    assert!(state.loading);
    assert_eq!(state.role(), Some(Role::Admin));
}
