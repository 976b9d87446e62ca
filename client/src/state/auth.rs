//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the session provider and read by the route guard and
//! user-aware components. `loading` is true while the session is being
//! resolved; an unresolved session is never reported as signed out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial provider state: no user yet, resolution in flight.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// Final state after a session lookup.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    /// Re-enter loading, keeping the current user visible until replaced.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
