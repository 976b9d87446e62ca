//! Passwordless sign-in with emailed access codes.
//!
//! A code is six characters from an unambiguous alphabet, stored only as a
//! SHA-256 hash, valid for ten minutes (table default), and burned after
//! `MAX_FAILED_ATTEMPTS` wrong guesses. Requesting a new code invalidates
//! any outstanding one for the same address.

use rand::Rng;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::session::bytes_to_hex;
use crate::config::EmailConfig;

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: i32 = 5;
const ACCESS_CODE_TEMPLATE: &str = include_str!("../../templates/access_code.html");
const ACCESS_CODE_SUBJECT: &str = "Your AI Interviewer access code";

#[derive(Debug, thiserror::Error)]
pub enum EmailAuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Lowercase and trim; `None` unless the result looks like `local@domain`.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

/// Uppercase and trim; `None` unless the code has the issued shape.
#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    let valid = normalized.len() == CODE_LEN && normalized.bytes().all(|b| CODE_ALPHABET.contains(&b));
    valid.then_some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    bytes_to_hex(&Sha256::digest(code.as_bytes()))
}

fn display_name_for(email: &str) -> &str {
    email
        .split('@')
        .next()
        .filter(|local| !local.trim().is_empty())
        .unwrap_or("candidate")
}

/// Ensure a user exists for `email` and issue a fresh access code.
///
/// # Errors
///
/// Returns [`EmailAuthError::InvalidEmail`] for malformed addresses and
/// [`EmailAuthError::Db`] on store failures.
pub async fn issue_access_code(pool: &PgPool, email: &str) -> Result<String, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;

    sqlx::query(
        r"INSERT INTO users (email, name)
          VALUES ($1, $2)
          ON CONFLICT (email) DO NOTHING",
    )
    .bind(&email)
    .bind(display_name_for(&email))
    .execute(pool)
    .await?;

    sqlx::query("DELETE FROM email_login_codes WHERE email = $1 AND consumed_at IS NULL")
        .bind(&email)
        .execute(pool)
        .await?;

    let code = generate_access_code();
    sqlx::query("INSERT INTO email_login_codes (email, code_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind(hash_access_code(&code))
        .execute(pool)
        .await?;

    Ok(code)
}

/// Consume a matching code and return the user it signs in.
///
/// # Errors
///
/// Returns [`EmailAuthError::VerificationFailed`] for wrong or expired codes;
/// each wrong guess counts toward the attempt limit.
pub async fn redeem_access_code(pool: &PgPool, email: &str, code: &str) -> Result<Uuid, EmailAuthError> {
    let email = normalize_email(email).ok_or(EmailAuthError::InvalidEmail)?;
    let code = normalize_code(code).ok_or(EmailAuthError::InvalidCode)?;

    let redeemed = sqlx::query(
        r"UPDATE email_login_codes
          SET consumed_at = now()
          WHERE id = (
              SELECT id FROM email_login_codes
              WHERE email = $1 AND consumed_at IS NULL AND expires_at > now()
              ORDER BY created_at DESC
              LIMIT 1
          )
          AND code_hash = $2
          RETURNING id",
    )
    .bind(&email)
    .bind(hash_access_code(&code))
    .fetch_optional(pool)
    .await?;

    if redeemed.is_none() {
        record_failed_attempt(pool, &email).await?;
        return Err(EmailAuthError::VerificationFailed);
    }

    let user = sqlx::query("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?
        .ok_or(EmailAuthError::VerificationFailed)?;

    Ok(user.get("id"))
}

async fn record_failed_attempt(pool: &PgPool, email: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"UPDATE email_login_codes
          SET attempts = attempts + 1,
              consumed_at = CASE WHEN attempts + 1 >= $2 THEN now() ELSE consumed_at END
          WHERE id = (
              SELECT id FROM email_login_codes
              WHERE email = $1 AND consumed_at IS NULL AND expires_at > now()
              ORDER BY created_at DESC
              LIMIT 1
          )",
    )
    .bind(email)
    .bind(MAX_FAILED_ATTEMPTS)
    .execute(pool)
    .await?;
    Ok(())
}

/// Send the code through Resend.
///
/// # Errors
///
/// Returns [`EmailAuthError::Delivery`] if the provider rejects the request.
pub async fn deliver_access_code(config: &EmailConfig, to_email: &str, code: &str) -> Result<(), EmailAuthError> {
    let resend = Resend::new(&config.api_key);
    let html = render_access_code_email(to_email, code);
    let message = CreateEmailBaseOptions::new(&config.from, [to_email], ACCESS_CODE_SUBJECT).with_html(&html);

    resend
        .emails
        .send(message)
        .await
        .map_err(|e| EmailAuthError::Delivery(e.to_string()))?;
    Ok(())
}

#[must_use]
pub fn render_access_code_email(email: &str, code: &str) -> String {
    ACCESS_CODE_TEMPLATE.replace("{{EMAIL}}", email).replace("{{CODE}}", code)
}

#[cfg(test)]
#[path = "email_auth_test.rs"]
mod tests;
