//! Report routes — creation, AI feedback, lookup.
//!
//! DESIGN
//! ======
//! Init and AI analysis are gated by `Capabilities`. The router puts
//! [`gate_report_init`] / [`gate_ai_analysis`] in front of each handler, so
//! a disabled capability answers 501 before the path or body is extracted.
//! The handlers check again on entry: both are mounted for every method and
//! take the raw body as `Bytes`, and the 501 comes before the method check,
//! body parsing, or any store access.

use axum::body::Bytes;
use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Response};
use wire::{AiFeedbackBody, Capability, InitReportBody, ReportBody};

use super::auth::AuthUser;
use super::error::ApiError;
use crate::services::StoreError;
use crate::services::analysis::{self, AnalysisError};
use crate::services::report::NewReport;
use crate::state::AppState;

fn require(state: &AppState, capability: Capability) -> Result<(), ApiError> {
    if state.capabilities.is_enabled(capability) {
        Ok(())
    } else {
        Err(ApiError::Unavailable(capability))
    }
}

async fn capability_gate(state: &AppState, capability: Capability, request: Request, next: Next) -> Response {
    match require(state, capability) {
        Ok(()) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}

/// Route layer for `/api/reports/init`.
pub async fn gate_report_init(State(state): State<AppState>, request: Request, next: Next) -> Response {
    capability_gate(&state, Capability::ReportInit, request, next).await
}

/// Route layer for `/api/reports/{session_token}/ai-analysis`.
pub async fn gate_ai_analysis(State(state): State<AppState>, request: Request, next: Next) -> Response {
    capability_gate(&state, Capability::AiAnalysis, request, next).await
}

fn store_error(err: StoreError, context: &'static str) -> ApiError {
    tracing::error!(error = %err, "{context}");
    ApiError::Internal(context)
}

fn normalize_token(raw: &str) -> Result<String, ApiError> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(ApiError::BadRequest("session_token is required".into()));
    }
    Ok(token.to_owned())
}

fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/reports/init` — create an empty report for a session token.
pub async fn init_report(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<(StatusCode, Json<ReportBody>), ApiError> {
    require(&state, Capability::ReportInit)?;
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }

    let body: InitReportBody =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?;
    let new = NewReport {
        session_token: normalize_token(&body.session_token)?,
        candidate_email: optional_text(body.candidate_email),
        candidate_name: optional_text(body.candidate_name),
    };

    let report = state.reports.create(new).await.map_err(|e| match e {
        StoreError::Conflict(_) => ApiError::Conflict("Report already exists for this session"),
        other => store_error(other, "Failed to create report"),
    })?;

    tracing::info!(session_token = %report.session_token, "report initialized");
    Ok((StatusCode::CREATED, Json(ReportBody::new(report))))
}

/// `POST /api/reports/{session_token}/ai-analysis` — generate and store AI feedback.
pub async fn ai_analysis(
    State(state): State<AppState>,
    method: Method,
    Path(session_token): Path<String>,
) -> Result<Json<AiFeedbackBody>, ApiError> {
    require(&state, Capability::AiAnalysis)?;
    if method != Method::POST {
        return Err(ApiError::MethodNotAllowed);
    }
    let session_token = normalize_token(&session_token)?;

    let Some(llm) = state.llm.clone() else {
        tracing::warn!("ai analysis requested but no LLM is configured");
        return Err(ApiError::NotConfigured("AI analysis is not configured"));
    };

    let report = state
        .reports
        .find_by_session_token(&session_token)
        .await
        .map_err(|e| store_error(e, "Failed to load report"))?
        .ok_or(ApiError::NotFound("Report not found"))?;

    let feedback = analysis::analyze_report(llm.as_ref(), &report).await.map_err(|e| {
        match &e {
            AnalysisError::Llm(inner) => tracing::error!(error = %inner, %session_token, "llm request failed"),
            other => tracing::warn!(error = %other, %session_token, "llm reply unusable"),
        }
        ApiError::Upstream("Failed to generate AI analysis")
    })?;

    let stored = state
        .reports
        .store_ai_feedback(&session_token, &feedback)
        .await
        .map_err(|e| store_error(e, "Failed to save AI analysis"))?;
    if !stored {
        return Err(ApiError::NotFound("Report not found"));
    }

    Ok(Json(AiFeedbackBody::new(feedback)))
}

/// `GET /api/reports/{session_token}` — fetch a report. Requires a session.
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(session_token): Path<String>,
) -> Result<Json<ReportBody>, ApiError> {
    let report = state
        .reports
        .find_by_session_token(session_token.trim())
        .await
        .map_err(|e| store_error(e, "Failed to load report"))?
        .ok_or(ApiError::NotFound("Report not found"))?;

    tracing::debug!(user_id = %auth.user.id, session_token = %report.session_token, "report viewed");
    Ok(Json(ReportBody::new(report)))
}

#[cfg(test)]
#[path = "reports_test.rs"]
mod tests;
