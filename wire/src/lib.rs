//! Shared JSON contract for the `server` API and the `client` UI.
//!
//! This crate owns every body that crosses the HTTP boundary so both sides
//! serialize the same shapes. Every API response carries a `success` flag;
//! failures carry a single safe `error` string and nothing else.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Error body for 405 responses.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Error body for subcategory store failures.
pub const SUBCATEGORIES_FETCH_FAILED: &str = "Failed to fetch subcategories";

// =============================================================================
// ROLES + USERS
// =============================================================================

/// Account role used for route-level access policies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Recruiter,
    #[default]
    Viewer,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Recruiter => "recruiter",
            Self::Viewer => "viewer",
        }
    }

    /// Parse a role name. Case-insensitive; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "recruiter" => Some(Self::Recruiter),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }
}

/// Unknown role names degrade to the least-privileged role.
impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw).unwrap_or_default()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// The signed-in user as returned by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// `POST /api/auth/email/request-code` body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
}

/// `POST /api/auth/email/request-code` response. `code` is only echoed back
/// when email delivery is not configured.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// `POST /api/auth/email/verify-code` body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// Returned when a value that must be a JSON object is some other JSON kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a JSON object, got {0}")]
pub struct DocumentError(pub &'static str);

/// Free-form structured mapping stored on a report (ratings, feedback,
/// metrics, full payload). Always a JSON object; anything else is rejected
/// when it enters the system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Document(Map<String, Value>);

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for Document {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DocumentError(json_kind(&other))),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.0)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Active subcategory as exposed by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// Interview report keyed by the interview session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub session_token: String,
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
    pub score: f64,
    #[serde(default)]
    pub section_ratings: Document,
    #[serde(default)]
    pub ai_feedback: Document,
    #[serde(default)]
    pub performance_metrics: Document,
    #[serde(default)]
    pub full_report: Document,
    /// RFC 3339 UTC timestamp assigned by the server.
    pub created_at: String,
}

/// `POST /api/reports/init` body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InitReportBody {
    pub session_token: String,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub candidate_name: Option<String>,
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// Route-level features that can be switched off by configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    ReportInit,
    AiAnalysis,
}

impl Capability {
    /// Fixed message returned with 501 while the capability is disabled.
    #[must_use]
    pub fn unavailable_message(self) -> &'static str {
        match self {
            Self::ReportInit => "Report init not available in AI Interviewer SaaS.",
            Self::AiAnalysis => "AI analysis not available in AI Interviewer SaaS.",
        }
    }

    /// Environment variable that enables the capability.
    #[must_use]
    pub fn env_key(self) -> &'static str {
        match self {
            Self::ReportInit => "FEATURE_REPORT_INIT",
            Self::AiAnalysis => "FEATURE_AI_ANALYSIS",
        }
    }
}

// =============================================================================
// RESPONSE BODIES
// =============================================================================

/// `{ success: false, error }` body shared by every failing endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    pub success: bool,
    pub error: String,
}

impl ApiFailure {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

/// `GET /api/subcategories` success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubcategoryList {
    pub success: bool,
    pub subcategories: Vec<Subcategory>,
}

impl SubcategoryList {
    #[must_use]
    pub fn new(subcategories: Vec<Subcategory>) -> Self {
        Self { success: true, subcategories }
    }
}

/// Single-report success body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportBody {
    pub success: bool,
    pub report: Report,
}

impl ReportBody {
    #[must_use]
    pub fn new(report: Report) -> Self {
        Self { success: true, report }
    }
}

/// AI analysis success body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiFeedbackBody {
    pub success: bool,
    pub ai_feedback: Document,
}

impl AiFeedbackBody {
    #[must_use]
    pub fn new(ai_feedback: Document) -> Self {
        Self { success: true, ai_feedback }
    }
}
