//! AI analysis of interview reports.
//!
//! DESIGN
//! ======
//! The model receives the candidate's scores and metrics as JSON and must
//! answer with a single JSON object. That object becomes the report's
//! `ai_feedback` mapping verbatim. Prose around the object is tolerated;
//! anything that is not an object is rejected.

use wire::{Document, Report};

use crate::llm::types::{LlmChat, LlmError, Message};

pub const ANALYSIS_MAX_TOKENS: u32 = 1500;

const SYSTEM_PROMPT: &str = "You are an interview evaluator. You receive a JSON summary of a \
candidate's interview: overall score, section ratings and performance metrics. Respond with \
exactly one JSON object and nothing else, with keys: \"summary\" (string), \"strengths\" \
(array of strings), \"improvements\" (array of strings), \"recommendation\" (one of \
\"strong_hire\", \"hire\", \"no_hire\").";

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("llm request failed: {0}")]
    Llm(#[from] LlmError),
    #[error("model response contained no JSON object")]
    MissingJson,
    #[error("model feedback is not a valid object: {0}")]
    InvalidFeedback(String),
}

/// Serialize the parts of a report the model is allowed to see.
#[must_use]
pub fn build_analysis_input(report: &Report) -> String {
    serde_json::json!({
        "candidate_name": report.candidate_name,
        "score": report.score,
        "section_ratings": report.section_ratings,
        "performance_metrics": report.performance_metrics,
    })
    .to_string()
}

/// Pull the outermost `{...}` span out of model text and parse it.
///
/// # Errors
///
/// Returns [`AnalysisError::MissingJson`] when there is no brace pair and
/// [`AnalysisError::InvalidFeedback`] when the span is not a JSON object.
pub fn extract_feedback(text: &str) -> Result<Document, AnalysisError> {
    let start = text.find('{').ok_or(AnalysisError::MissingJson)?;
    let end = text.rfind('}').ok_or(AnalysisError::MissingJson)?;
    if end < start {
        return Err(AnalysisError::MissingJson);
    }
    serde_json::from_str::<Document>(&text[start..=end]).map_err(|e| AnalysisError::InvalidFeedback(e.to_string()))
}

/// Ask the model for structured feedback on `report`.
///
/// # Errors
///
/// Propagates LLM failures and feedback extraction failures.
pub async fn analyze_report(llm: &dyn LlmChat, report: &Report) -> Result<Document, AnalysisError> {
    let messages = [Message::user(build_analysis_input(report))];
    let response = llm.chat(ANALYSIS_MAX_TOKENS, SYSTEM_PROMPT, &messages).await?;

    tracing::info!(
        session_token = %report.session_token,
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "ai analysis completed"
    );

    if response.truncated {
        tracing::warn!(session_token = %report.session_token, "ai analysis reply hit the token limit");
    }

    extract_feedback(&response.text)
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
