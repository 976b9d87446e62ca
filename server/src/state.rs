//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries no per-request data: the pool (sessions, access codes), the two
//! record stores as trait objects, capability flags, and optional outbound
//! integrations. Handlers never mutate it.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{Capabilities, EmailConfig};
use crate::llm::LlmChat;
use crate::services::report::{PgReportStore, ReportStore};
use crate::services::subcategory::{PgSubcategoryStore, SubcategoryStore};

/// Shared application state. Clone is required by Axum; every field is
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub subcategories: Arc<dyn SubcategoryStore>,
    pub reports: Arc<dyn ReportStore>,
    pub capabilities: Capabilities,
    /// `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    /// `None` if Resend is not configured.
    pub email: Option<EmailConfig>,
    pub cookie_secure: bool,
    pub echo_access_codes: bool,
}

impl AppState {
    /// Build state with Postgres-backed stores sharing `pool`.
    #[must_use]
    pub fn new(pool: PgPool, capabilities: Capabilities) -> Self {
        Self {
            subcategories: Arc::new(PgSubcategoryStore::new(pool.clone())),
            reports: Arc::new(PgReportStore::new(pool.clone())),
            pool,
            capabilities,
            llm: None,
            email: None,
            cookie_secure: false,
            echo_access_codes: false,
        }
    }

    #[must_use]
    pub fn with_llm(mut self, llm: Option<Arc<dyn LlmChat>>) -> Self {
        self.llm = llm;
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: Option<EmailConfig>) -> Self {
        self.email = email;
        self
    }

    #[must_use]
    pub fn with_cookie_policy(mut self, cookie_secure: bool, echo_access_codes: bool) -> Self {
        self.cookie_secure = cookie_secure;
        self.echo_access_codes = echo_access_codes;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
