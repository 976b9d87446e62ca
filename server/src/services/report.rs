//! Report store — interview reports keyed by session token.
//!
//! DESIGN
//! ======
//! Reports are document-shaped: scalar candidate fields plus four free-form
//! mappings persisted as JSONB. Mappings are validated as JSON objects on the
//! way in (`wire::Document`) and again on the way out, so a row edited by
//! hand into a non-object fails loudly instead of leaking to clients.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use wire::{Document, Report};

use super::StoreError;

const REPORT_COLUMNS: &str = r#"session_token, candidate_email, candidate_name, score,
    section_ratings, ai_feedback, performance_metrics, full_report,
    to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at"#;

/// Fields supplied by the caller when a report is first created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReport {
    pub session_token: String,
    pub candidate_email: Option<String>,
    pub candidate_name: Option<String>,
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Insert an empty report. Fails with [`StoreError::Conflict`] when a
    /// report already exists for the session token.
    async fn create(&self, report: NewReport) -> Result<Report, StoreError>;

    async fn find_by_session_token(&self, session_token: &str) -> Result<Option<Report>, StoreError>;

    /// Replace the AI feedback mapping. Returns `false` when no report exists.
    async fn store_ai_feedback(&self, session_token: &str, feedback: &Document) -> Result<bool, StoreError>;
}

/// Postgres-backed report store.
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn document_column(row: &PgRow, column: &str) -> Result<Document, StoreError> {
    let Json(value) = row.try_get::<Json<Value>, _>(column)?;
    Document::try_from(value).map_err(|e| StoreError::Decode(format!("{column}: {e}")))
}

fn report_from_row(row: &PgRow) -> Result<Report, StoreError> {
    Ok(Report {
        session_token: row.try_get("session_token")?,
        candidate_email: row.try_get("candidate_email")?,
        candidate_name: row.try_get("candidate_name")?,
        score: row.try_get("score")?,
        section_ratings: document_column(row, "section_ratings")?,
        ai_feedback: document_column(row, "ai_feedback")?,
        performance_metrics: document_column(row, "performance_metrics")?,
        full_report: document_column(row, "full_report")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn create(&self, report: NewReport) -> Result<Report, StoreError> {
        let sql = format!(
            "INSERT INTO reports (session_token, candidate_email, candidate_name)
             VALUES ($1, $2, $3)
             ON CONFLICT (session_token) DO NOTHING
             RETURNING {REPORT_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(&report.session_token)
            .bind(&report.candidate_email)
            .bind(&report.candidate_name)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Err(StoreError::Conflict(format!("report exists for session {}", report.session_token)));
        };
        report_from_row(&row)
    }

    async fn find_by_session_token(&self, session_token: &str) -> Result<Option<Report>, StoreError> {
        let sql = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE session_token = $1");
        let row = sqlx::query(&sql)
            .bind(session_token)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(report_from_row).transpose()
    }

    async fn store_ai_feedback(&self, session_token: &str, feedback: &Document) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE reports SET ai_feedback = $2, updated_at = now() WHERE session_token = $1")
            .bind(session_token)
            .bind(Json(feedback))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
