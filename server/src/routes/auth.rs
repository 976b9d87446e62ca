//! Auth routes — email access codes, session cookie, current user.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use wire::{RequestCodeBody, RequestCodeResponse, User, VerifyCodeBody};

use super::error::ApiError;
use crate::services::email_auth::{self, EmailAuthError};
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: User,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(ApiError::Unauthorized);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                ApiError::Internal("Failed to validate session")
            })?
            .ok_or(ApiError::Unauthorized)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

fn email_auth_error(err: EmailAuthError) -> ApiError {
    match err {
        EmailAuthError::InvalidEmail => ApiError::BadRequest("Invalid email address".into()),
        EmailAuthError::InvalidCode => ApiError::BadRequest("Invalid access code".into()),
        EmailAuthError::VerificationFailed => ApiError::Unauthorized,
        EmailAuthError::Db(e) => {
            tracing::error!(error = %e, "access code store failed");
            ApiError::Internal("Sign-in is temporarily unavailable")
        }
        EmailAuthError::Delivery(e) => {
            tracing::error!(error = %e, "access code delivery failed");
            ApiError::Upstream("Failed to send access code")
        }
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/auth/email/request-code` — issue and deliver an access code.
pub async fn request_email_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeBody>,
) -> Result<Json<RequestCodeResponse>, ApiError> {
    let code = email_auth::issue_access_code(&state.pool, &body.email)
        .await
        .map_err(email_auth_error)?;

    if let Some(email) = &state.email {
        email_auth::deliver_access_code(email, body.email.trim(), &code)
            .await
            .map_err(email_auth_error)?;
        tracing::info!("access code delivered");
        return Ok(Json(RequestCodeResponse { ok: true, code: None }));
    }

    if state.echo_access_codes {
        tracing::warn!("email delivery not configured; echoing access code");
        return Ok(Json(RequestCodeResponse { ok: true, code: Some(code) }));
    }

    tracing::error!("email delivery not configured and ACCESS_CODE_ECHO disabled");
    Err(ApiError::NotConfigured("Email sign-in is not configured"))
}

/// `POST /api/auth/email/verify-code` — redeem a code and set the session cookie.
pub async fn verify_email_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = email_auth::redeem_access_code(&state.pool, &body.email, &body.code)
        .await
        .map_err(email_auth_error)?;

    let token = session::create_session(&state.pool, user_id).await.map_err(|e| {
        tracing::error!(error = %e, %user_id, "session creation failed");
        ApiError::Internal("Failed to create session")
    })?;

    tracing::info!(%user_id, "user signed in");
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    Ok((jar, StatusCode::NO_CONTENT))
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<User> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed during logout");
    }

    let jar = CookieJar::new().add(expired_session_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
