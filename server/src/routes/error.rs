//! API error type and its JSON rendering.
//!
//! ERROR HANDLING
//! ==============
//! Every failing API response is `{ success: false, error }`. Variants only
//! carry the caller-safe message; handlers log internal detail with
//! `tracing` before converting, so store and upstream errors never reach
//! the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use wire::{ApiFailure, Capability, METHOD_NOT_ALLOWED_MESSAGE};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,
    #[error("{}", .0.unavailable_message())]
    Unavailable(Capability),
    #[error("{0}")]
    BadRequest(String),
    #[error("Authentication required")]
    Unauthorized,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(&'static str),
    #[error("{0}")]
    Internal(&'static str),
    #[error("{0}")]
    Upstream(&'static str),
    #[error("{0}")]
    NotConfigured(&'static str),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unavailable(_) => StatusCode::NOT_IMPLEMENTED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiFailure::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
