//! Outermost render-error containment.

#[cfg(test)]
#[path = "error_boundary_test.rs"]
mod error_boundary_test;

use leptos::prelude::*;

/// Drop every captured error so the boundary renders its children again.
pub fn recover(errors: &ArcRwSignal<Errors>) {
    errors.set(Errors::default());
}

/// Catches errors raised while rendering `children` and shows a generic
/// fallback with a recovery action. Error text goes to the log only.
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback={|errors: ArcRwSignal<Errors>| {
            for (_, err) in errors.get_untracked().iter() {
                leptos::logging::error!("render error: {err}");
            }
            view! {
                <div class="error-fallback" role="alert">
                    <h2>"Something went wrong."</h2>
                    <p>"This part of the page failed to load."</p>
                    <button class="btn" on:click=move |_| recover(&errors)>
                        "Try again"
                    </button>
                </div>
            }
        }}>{children()}</ErrorBoundary>
    }
}
