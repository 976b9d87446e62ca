//! Runtime configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` builds one `AppConfig` at startup (after loading `.env` through
//! `dotenvy`). Optional integrations (email delivery, LLM) are resolved
//! separately so a missing key disables the feature instead of aborting boot.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wire::Capability;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Parse a boolean flag. Accepts `1/true/yes/on` and `0/false/no/off`.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|raw| parse_bool(&raw))
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// Route-level feature switches. Both default to off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub report_init: bool,
    pub ai_analysis: bool,
}

impl Capabilities {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            report_init: env_bool(Capability::ReportInit.env_key()).unwrap_or(false),
            ai_analysis: env_bool(Capability::AiAnalysis.env_key()).unwrap_or(false),
        }
    }

    #[must_use]
    pub fn is_enabled(self, capability: Capability) -> bool {
        match capability {
            Capability::ReportInit => self.report_init,
            Capability::AiAnalysis => self.ai_analysis,
        }
    }
}

// =============================================================================
// EMAIL
// =============================================================================

/// Resend credentials for access-code delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub api_key: String,
    pub from: String,
}

impl EmailConfig {
    /// `None` unless both `RESEND_API_KEY` and `RESEND_FROM` are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok().filter(|v| !v.trim().is_empty())?;
        let from = std::env::var("RESEND_FROM").ok().filter(|v| !v.trim().is_empty())?;
        Some(Self { api_key, from })
    }
}

// =============================================================================
// APP CONFIG
// =============================================================================

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub capabilities: Capabilities,
    /// Set the `Secure` attribute on session cookies.
    pub cookie_secure: bool,
    /// Return generated access codes in the response body when no email
    /// delivery is configured. Development only.
    pub echo_access_codes: bool,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: default false
    /// - `ACCESS_CODE_ECHO`: default false
    /// - `FEATURE_REPORT_INIT`, `FEATURE_AI_ANALYSIS`: default false
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or `PORT` is not a `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;

        Ok(Self {
            database_url,
            port,
            capabilities: Capabilities::from_env(),
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            echo_access_codes: env_bool("ACCESS_CODE_ECHO").unwrap_or(false),
        })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::Invalid { key: "PORT", value: value.to_owned() }),
    }
}
