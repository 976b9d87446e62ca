//! Subcategory store — read-only listing of active rows.
//!
//! TRADE-OFFS
//! ==========
//! The listing is unbounded (no pagination or limit). Subcategory tables are
//! expected to stay small; revisit if that stops being true.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use wire::Subcategory;

use super::StoreError;

#[async_trait]
pub trait SubcategoryStore: Send + Sync {
    /// Active subcategories, most recently created first.
    async fn list_active(&self) -> Result<Vec<Subcategory>, StoreError>;
}

/// Postgres-backed subcategory store.
pub struct PgSubcategoryStore {
    pool: PgPool,
}

impl PgSubcategoryStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubcategoryStore for PgSubcategoryStore {
    async fn list_active(&self) -> Result<Vec<Subcategory>, StoreError> {
        let rows = sqlx::query(
            r"SELECT id, name, description
              FROM subcategories
              WHERE is_active = true
              ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| Subcategory { id: r.get("id"), name: r.get("name"), description: r.get("description") })
            .collect())
    }
}

#[cfg(test)]
#[path = "subcategory_test.rs"]
mod tests;
