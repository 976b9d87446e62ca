//! Subcategory catalog page (admins and recruiters).

use leptos::prelude::*;

use super::dashboard::CATALOG_ROLES;
use crate::net::types::Subcategory;
use crate::util::guard::{RouteAccessPolicy, use_protected_route};

#[component]
pub fn SubcategoriesPage() -> impl IntoView {
    let authorized = use_protected_route(RouteAccessPolicy::authenticated().with_roles(CATALOG_ROLES));
    let items = RwSignal::new(Vec::<Subcategory>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let requested = RwSignal::new(false);

    // Fetch once, after the guard admits the user.
    Effect::new(move || {
        if !authorized.get() || requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let notifications =
                use_context::<crate::components::notification_provider::NotificationHandle>();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_subcategories().await {
                    Ok(rows) => items.set(rows),
                    Err(e) => {
                        if let Some(n) = notifications {
                            n.error(e.clone());
                        }
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
        }
    });

    view! {
        <Show
            when=move || authorized.get()
            fallback=move || view! { <div class="catalog-page"><p>"Loading..."</p></div> }
        >
            <div class="catalog-page">
                <h1>"Interview subcategories"</h1>
                <Show when=move || error.get().is_some()>
                    <p class="catalog-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p>"Loading subcategories..."</p> }
                >
                    <Show
                        when=move || !items.get().is_empty() || error.get().is_some()
                        fallback=move || view! { <p>"No active subcategories."</p> }
                    >
                        <ul class="catalog-page__list">
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <li class="catalog-page__item">
                                                <strong>{s.name}</strong>
                                                <p>{s.description.unwrap_or_default()}</p>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </div>
        </Show>
    }
}
