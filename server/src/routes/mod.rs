//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. API paths live under `/api`; everything else
//! is rendered by the Leptos app, whose own fallback is the not-found page.
//!
//! Capability-gated and method-checked endpoints are mounted with `any()` so
//! their handlers own the 405 responses and keep the JSON error shape. The
//! capability gates are route layers, so a disabled endpoint answers 501
//! before axum reads the path parameters or buffers the body.

pub mod auth;
pub mod error;
pub mod reports;
pub mod subcategories;

use std::path::PathBuf;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::http::StatusCode;
use axum::routing::{any, get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes plus the health probe.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/subcategories", any(subcategories::list_subcategories))
        .route(
            "/api/reports/init",
            any(reports::init_report).route_layer(from_fn_with_state(state.clone(), reports::gate_report_init)),
        )
        .route(
            "/api/reports/{session_token}/ai-analysis",
            any(reports::ai_analysis).route_layer(from_fn_with_state(state.clone(), reports::gate_ai_analysis)),
        )
        .route("/api/reports/{session_token}", get(reports::get_report))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/email/request-code", post(auth::request_email_code))
        .route("/api/auth/email/verify-code", post(auth::verify_email_code))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR for every other path.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` section or `LEPTOS_*` environment).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
