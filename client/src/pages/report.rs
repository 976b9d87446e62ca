//! Report page: one interview report by session token.
//!
//! Ratings, metrics and AI feedback are free-form JSON objects, rendered as
//! key/value rows in key order.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Document, Report};
use crate::util::guard::{RouteAccessPolicy, use_protected_route};

/// Flatten a document into display rows. Strings render without quotes.
#[must_use]
pub fn document_rows(doc: &Document) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = doc
        .as_map()
        .iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|i| i.as_str().map_or_else(|| i.to_string(), str::to_owned))
                    .collect::<Vec<_>>()
                    .join(", "),
                other => other.to_string(),
            };
            (k.clone(), text)
        })
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

#[component]
fn DocumentTable(title: &'static str, rows: Vec<(String, String)>) -> impl IntoView {
    let empty = rows.is_empty();
    view! {
        <section class="report-page__section">
            <h2>{title}</h2>
            {if empty {
                view! { <p class="report-page__empty">"Nothing recorded."</p> }.into_any()
            } else {
                view! {
                    <dl>
                        {rows
                            .into_iter()
                            .map(|(k, v)| view! { <dt>{k}</dt><dd>{v}</dd> })
                            .collect::<Vec<_>>()}
                    </dl>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let authorized = use_protected_route(RouteAccessPolicy::authenticated());
    let params = use_params_map();
    let report = RwSignal::new(None::<Report>);
    let error = RwSignal::new(None::<String>);

    // Refetch whenever the token in the URL changes.
    Effect::new(move || {
        if !authorized.get() {
            return;
        }
        let token = params.get().get("session_token").unwrap_or_default();
        report.set(None);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_report(&token).await {
                Ok(r) => report.set(Some(r)),
                Err(e) => error.set(Some(e)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    });

    view! {
        <Show
            when=move || authorized.get()
            fallback=move || view! { <div class="report-page"><p>"Loading..."</p></div> }
        >
            <div class="report-page">
                <Show when=move || error.get().is_some()>
                    <p class="report-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    report
                        .get()
                        .map(|r| {
                            view! {
                                <h1>{r.candidate_name.clone().unwrap_or_else(|| "Unnamed candidate".to_owned())}</h1>
                                <p class="report-page__meta">
                                    {r.candidate_email.clone().unwrap_or_default()}
                                    " · "
                                    {r.created_at.clone()}
                                </p>
                                <p class="report-page__score">"Score: " {format!("{:.1}", r.score)}</p>
                                <DocumentTable title="Section ratings" rows=document_rows(&r.section_ratings)/>
                                <DocumentTable title="Performance metrics" rows=document_rows(&r.performance_metrics)/>
                                <DocumentTable title="AI feedback" rows=document_rows(&r.ai_feedback)/>
                            }
                        })
                }}
            </div>
        </Show>
    }
}
