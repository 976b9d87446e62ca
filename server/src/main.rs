mod config;
mod db;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::config::{AppConfig, EmailConfig};
use crate::llm::LlmChat;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal in deployed environments.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let pool = db::init_pool(&config.database_url).await?;

    // Initialize LLM client (non-fatal: AI analysis answers 503 if config missing).
    let llm: Option<Arc<dyn LlmChat>> = match llm::AnthropicClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; AI analysis disabled");
            None
        }
    };

    let email = EmailConfig::from_env();
    if email.is_none() {
        tracing::warn!("RESEND_API_KEY/RESEND_FROM not set; access codes will not be emailed");
    }

    tracing::info!(
        report_init = config.capabilities.report_init,
        ai_analysis = config.capabilities.ai_analysis,
        "capabilities resolved"
    );

    let state = state::AppState::new(pool, config.capabilities)
        .with_llm(llm)
        .with_email(email)
        .with_cookie_policy(config.cookie_secure, config.echo_access_codes);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos app unavailable; serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "interviewer listening");
    axum::serve(listener, app).await?;
    Ok(())
}
