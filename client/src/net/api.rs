//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior without crashing hydration. When the server sent a
//! `{ success: false, error }` envelope its message is surfaced; otherwise
//! the status code is.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Report, Subcategory, User};
#[cfg(feature = "hydrate")]
use super::types::{ReportBody, RequestCodeResponse, SubcategoryList};

#[cfg(any(test, feature = "hydrate"))]
fn report_endpoint(session_token: &str) -> String {
    format!("/api/reports/{}", crate::util::url::encode_segment(session_token))
}

/// Pick the server's envelope message when present, else describe the status.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, body: Option<&str>) -> String {
    body.and_then(|raw| serde_json::from_str::<super::types::ApiFailure>(raw).ok())
        .map(|failure| failure.error)
        .filter(|msg| !msg.is_empty())
        .unwrap_or_else(|| format!("{action} failed: {status}"))
}

#[cfg(feature = "hydrate")]
async fn read_failure(action: &str, resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.ok();
    failure_message(action, status, body.as_deref())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
///
/// `Ok(None)` means the server answered and there is no session.
///
/// # Errors
///
/// Returns an error string when the request itself fails.
pub async fn fetch_current_user() -> Result<Option<User>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(read_failure("session lookup", resp).await);
        }
        resp.json::<User>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// Returns an optional code string when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds with a non-OK status.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/email/request-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("request code", resp).await);
        }
        let body: RequestCodeResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("request code failed".to_owned());
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
/// On success the server has set the session cookie.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the code is rejected.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        let resp = gloo_net::http::Request::post("/api/auth/email/verify-code")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("verify code", resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        Err("not available on server".to_owned())
    }
}

/// List active subcategories from `GET /api/subcategories`.
///
/// # Errors
///
/// Returns the server's error message or a status description.
pub async fn fetch_subcategories() -> Result<Vec<Subcategory>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/subcategories")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("subcategory fetch", resp).await);
        }
        let body: SubcategoryList = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.subcategories)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one report from `GET /api/reports/{session_token}`.
///
/// # Errors
///
/// Returns the server's error message or a status description.
pub async fn fetch_report(session_token: &str) -> Result<Report, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = report_endpoint(session_token);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(read_failure("report fetch", resp).await);
        }
        let body: ReportBody = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.report)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_token;
        Err("not available on server".to_owned())
    }
}
