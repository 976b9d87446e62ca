//! Page layout: providers plus the decorative frame.
//!
//! ARCHITECTURE
//! ============
//! Outermost to innermost: error boundary, notifications, session, frame.
//! The session provider reports lookup failures through the notification
//! context, so notifications must be mounted first.

use leptos::prelude::*;

use super::error_boundary::AppErrorBoundary;
use super::notification_provider::NotificationProvider;
use super::session_provider::{SessionHandle, SessionProvider};

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <AppErrorBoundary>
            <NotificationProvider>
                <SessionProvider>
                    <AppFrame>{children()}</AppFrame>
                </SessionProvider>
            </NotificationProvider>
        </AppErrorBoundary>
    }
}

/// Header with brand and user chip, main content, footer.
#[component]
fn AppFrame(children: Children) -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let auth = session.state();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(session.logout());
    };

    view! {
        <div class="app-frame">
            <header class="app-frame__header">
                <a href="/dashboard" class="app-frame__brand">"AI Interviewer"</a>
                <span class="app-frame__spacer"></span>
                <Show when=move || auth.get().is_authenticated()>
                    <span class="app-frame__user">
                        {move || auth.get().user.map(|u| u.name).unwrap_or_default()}
                        " ("
                        <span class="app-frame__role">
                            {move || auth.get().role().map(|r| r.as_str()).unwrap_or_default()}
                        </span>
                        ")"
                    </span>
                    <button class="btn app-frame__logout" on:click=on_logout title="Sign out">
                        "Sign out"
                    </button>
                </Show>
            </header>
            <main class="app-frame__main">{children()}</main>
            <footer class="app-frame__footer">
                <span>"AI Interviewer SaaS"</span>
            </footer>
        </div>
    }
}
