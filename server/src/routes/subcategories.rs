//! Subcategory listing route.

use axum::extract::State;
use axum::http::Method;
use axum::response::Json;
use wire::{SUBCATEGORIES_FETCH_FAILED, SubcategoryList};

use super::error::ApiError;
use crate::state::AppState;

/// `GET /api/subcategories` — active subcategories, newest first.
///
/// Mounted for every method so non-GET requests get the JSON 405 body.
pub async fn list_subcategories(State(state): State<AppState>, method: Method) -> Result<Json<SubcategoryList>, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let rows = state.subcategories.list_active().await.map_err(|e| {
        tracing::error!(error = %e, "subcategory query failed");
        ApiError::Internal(SUBCATEGORIES_FETCH_FAILED)
    })?;

    tracing::debug!(count = rows.len(), "listed subcategories");
    Ok(Json(SubcategoryList::new(rows)))
}

#[cfg(test)]
#[path = "subcategories_test.rs"]
mod tests;
