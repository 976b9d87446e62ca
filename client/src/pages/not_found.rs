//! Fallback page for unknown routes.

use leptos::prelude::*;

use crate::util::guard::LANDING_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page could not be found."</p>
            <a class="btn" href=LANDING_PATH>"Back to dashboard"</a>
        </div>
    }
}
