//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence and business logic so route handlers can
//! stay focused on method checks, capability flags, and status mapping.
//! Subcategory and report access sit behind store traits; routes hold them
//! as trait objects in `AppState`.

pub mod analysis;
pub mod email_auth;
pub mod report;
pub mod session;
pub mod subcategory;

/// Failure reported by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid stored value: {0}")]
    Decode(String),
}
