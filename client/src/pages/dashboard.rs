//! Dashboard page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every signed-in role lands here, including users bounced from pages
//! their role cannot open. It links to the role-restricted pages and opens
//! reports by session token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::guard::{RouteAccessPolicy, use_protected_route};
use crate::util::url::encode_segment;

/// Roles that may browse the subcategory catalog.
pub const CATALOG_ROLES: [Role; 2] = [Role::Admin, Role::Recruiter];

/// Client-side path for a report view.
#[must_use]
pub fn report_path(session_token: &str) -> Option<String> {
    let token = session_token.trim();
    (!token.is_empty()).then(|| format!("/reports/{}", encode_segment(token)))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let authorized = use_protected_route(RouteAccessPolicy::authenticated());
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let token = RwSignal::new(String::new());
    let open_path = RwSignal::new(None::<String>);
    let can_browse_catalog = move || auth.get().role().is_some_and(|r| CATALOG_ROLES.contains(&r));
    let display_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    Effect::new(move || {
        if let Some(path) = open_path.get() {
            open_path.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_open_report = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        open_path.set(report_path(&token.get()));
    };

    view! {
        <Show
            when=move || authorized.get()
            fallback=move || view! { <div class="dashboard-page"><p>"Loading..."</p></div> }
        >
            <div class="dashboard-page">
                <h1>"Welcome, " {display_name}</h1>
                <Show when=can_browse_catalog>
                    <a class="btn" href="/subcategories">"Interview subcategories"</a>
                </Show>
                <form class="dashboard-page__report-form" on:submit=on_open_report>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Interview session token"
                        prop:value=move || token.get()
                        on:input=move |ev| token.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Open report"</button>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;
