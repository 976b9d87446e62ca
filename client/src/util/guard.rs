//! Protected-route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages call [`use_protected_route`] with a [`RouteAccessPolicy`]
//! and render their content only while the returned signal is `true`. The
//! decision itself is the pure [`evaluate`]; the hook wires it to an
//! `Effect` over the session context and the router's navigate function.
//!
//! DESIGN
//! ======
//! - While the session is loading nothing happens. A loading session is not
//!   a signed-out session.
//! - Signed out: redirect to the policy's login path.
//! - Signed in with a role outside the allowed set: redirect to the landing
//!   page.
//! - `authorized` is computed from the session alone, whether or not a
//!   redirect fired.
//!
//! [`RedirectLatch`] keeps re-runs of the effect with unchanged inputs from
//! navigating to the same target twice.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Where signed-out users are sent unless the policy says otherwise.
pub const DEFAULT_LOGIN_PATH: &str = "/auth/login";

/// Where signed-in users without the required role are sent.
pub const LANDING_PATH: &str = "/dashboard";

/// Access requirements for one protected route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteAccessPolicy {
    /// `None` admits every signed-in user.
    pub allowed_roles: Option<Vec<Role>>,
    /// `None` means [`DEFAULT_LOGIN_PATH`].
    pub redirect_to: Option<String>,
}

impl RouteAccessPolicy {
    /// Any signed-in user, default login redirect.
    #[must_use]
    pub fn authenticated() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.allowed_roles = Some(roles.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        self.redirect_to.as_deref().unwrap_or(DEFAULT_LOGIN_PATH)
    }

    /// Role check only; authentication is checked separately.
    #[must_use]
    pub fn admits(&self, role: Role) -> bool {
        self.allowed_roles.as_ref().is_none_or(|roles| roles.contains(&role))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; take no action.
    Pending,
    /// Navigate to this path.
    Redirect(String),
    Authorized,
}

impl GuardDecision {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Redirect(path) => Some(path),
            Self::Pending | Self::Authorized => None,
        }
    }
}

/// Decide what a protected route should do for `state` under `policy`.
#[must_use]
pub fn evaluate(state: &AuthState, policy: &RouteAccessPolicy) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match state.role() {
        None => GuardDecision::Redirect(policy.login_path().to_owned()),
        Some(role) if !policy.admits(role) => GuardDecision::Redirect(LANDING_PATH.to_owned()),
        Some(_) => GuardDecision::Authorized,
    }
}

/// `authenticated && (no role restriction || role allowed)`.
#[must_use]
pub fn is_authorized(state: &AuthState, policy: &RouteAccessPolicy) -> bool {
    state.role().is_some_and(|role| policy.admits(role))
}

/// Suppresses repeated redirects to the same target.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    last: Option<String>,
}

impl RedirectLatch {
    /// Returns the path to navigate to, or `None` if there is nothing new to
    /// do. An `Authorized` decision re-arms the latch.
    pub fn take(&mut self, decision: &GuardDecision) -> Option<String> {
        match decision {
            GuardDecision::Pending => None,
            GuardDecision::Authorized => {
                self.last = None;
                None
            }
            GuardDecision::Redirect(path) => {
                if self.last.as_deref() == Some(path.as_str()) {
                    return None;
                }
                self.last = Some(path.clone());
                Some(path.clone())
            }
        }
    }
}

/// Re-evaluate `policy` whenever `auth` changes and navigate on redirects.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, policy: RouteAccessPolicy, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut latch = RedirectLatch::default();
    Effect::new(move || {
        let decision = evaluate(&auth.get(), &policy);
        if let Some(path) = latch.take(&decision) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Guard the current route. Returns whether the user may see its content.
pub fn use_protected_route(policy: RouteAccessPolicy) -> Signal<bool> {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, policy.clone(), use_navigate());
    Signal::derive(move || is_authorized(&auth.get(), &policy))
}
