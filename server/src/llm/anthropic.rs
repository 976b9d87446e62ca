//! Anthropic Messages API adapter.
//!
//! The analysis path sends one system prompt plus plain-text user messages
//! and reads back text. Reply blocks of any other type (thinking, tool use)
//! are skipped while the reply is folded into a [`ChatResponse`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::LlmConfig;
use super::types::{ChatResponse, LlmChat, LlmError, Message};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const STOP_AT_TOKEN_LIMIT: &str = "max_tokens";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    /// Build a client from `LLM_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_config(LlmConfig::from_env()?)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key: config.api_key, model: config.model })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for AnthropicClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        let request = MessagesRequest { model: &self.model, max_tokens, system, messages };

        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if !status.is_success() {
            let detail = error_detail(&body);
            tracing::warn!(status = status.as_u16(), %detail, "anthropic rejected messages request");
            return Err(LlmError::ApiResponse { status: status.as_u16(), body: detail });
        }

        fold_reply(&body)
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: &'a [Message],
}

#[derive(Deserialize)]
struct MessagesReply {
    model: String,
    content: Vec<ReplyBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: ReplyUsage,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplyBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Default, Deserialize)]
struct ReplyUsage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Join the reply's text blocks with newlines, in order.
fn fold_reply(body: &str) -> Result<ChatResponse, LlmError> {
    let reply: MessagesReply = serde_json::from_str(body).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = reply
        .content
        .into_iter()
        .filter_map(|block| match block {
            ReplyBlock::Text { text } => Some(text),
            ReplyBlock::Other => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ChatResponse {
        text,
        model: reply.model,
        truncated: reply.stop_reason.as_deref() == Some(STOP_AT_TOKEN_LIMIT),
        input_tokens: reply.usage.input_tokens,
        output_tokens: reply.usage.output_tokens,
    })
}

/// The provider's `error.message` when the body carries one, else the body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body).map_or_else(|_| body.to_owned(), |envelope| envelope.error.message)
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
