//! Session context: the signed-in user and how it changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` sits inside the notification provider and above every
//! page. On mount it publishes an `RwSignal<AuthState>` in the `loading`
//! state and starts resolving the session cookie via `GET /api/auth/me`.
//! The route guard and the page frame read that signal; only the
//! `SessionHandle` operations write it.
//!
//! ERROR HANDLING
//! ==============
//! A failed lookup leaves the user signed out and raises an error
//! notification when a notification provider is mounted above.

use leptos::prelude::*;

use super::notification_provider::NotificationHandle;
use crate::state::auth::AuthState;

/// Copyable handle to the session state and its operations.
#[derive(Clone, Copy)]
pub struct SessionHandle {
    state: RwSignal<AuthState>,
    notifications: Option<NotificationHandle>,
}

impl SessionHandle {
    #[must_use]
    pub fn state(self) -> RwSignal<AuthState> {
        self.state
    }

    /// Re-enter loading and resolve the session again.
    pub fn refresh(self) {
        self.state.update(AuthState::begin_refresh);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(self.resolve());
    }

    #[cfg(feature = "hydrate")]
    async fn resolve(self) {
        match crate::net::api::fetch_current_user().await {
            Ok(user) => self.state.set(AuthState::resolved(user)),
            Err(e) => {
                log::warn!("session lookup failed: {e}");
                self.state.set(AuthState::resolved(None));
                if let Some(notifications) = self.notifications {
                    notifications.error("Could not check your session. Please sign in again.");
                }
            }
        }
    }

    /// Redeem an email access code, then reload the session.
    ///
    /// # Errors
    ///
    /// Returns the server's message when the code is rejected.
    pub async fn login(self, email: String, code: String) -> Result<(), String> {
        crate::net::api::verify_email_login_code(&email, &code).await?;
        self.state.update(AuthState::begin_refresh);
        #[cfg(feature = "hydrate")]
        self.resolve().await;
        Ok(())
    }

    /// End the session on the server and clear local state.
    pub async fn logout(self) {
        crate::net::api::logout().await;
        self.state.set(AuthState::resolved(None));
        if let Some(notifications) = self.notifications {
            notifications.success("Signed out.");
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(AuthState::resolving());
    let session = SessionHandle { state, notifications: use_context::<NotificationHandle>() };
    provide_context(state);
    provide_context(session);

    // Effects only run in the browser, so SSR renders the loading state.
    Effect::new(move || session.refresh());

    children()
}
