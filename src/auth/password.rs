//! Password hashing and verification.
//!
//! Argon2id with a fresh random salt per call; the output is a
//! self-describing PHC string, so `verify_password` needs nothing but the
//! stored value.

use std::sync::OnceLock;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

use crate::types::error::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC string. A malformed
/// stored hash is a failed match, not an error.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hashing is deliberately expensive; run it off the async executor.
pub async fn hash_password_blocking(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("hash task failed: {e}")))?
}

pub async fn verify_password_blocking(password: String, stored: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &stored))
        .await
        .map_err(|e| AppError::Internal(format!("verify task failed: {e}")))
}

static REFERENCE_HASH: OnceLock<String> = OnceLock::new();

/// Burn a verification against a fixed reference hash so a login attempt
/// for an unknown email costs the same as one for a known email.
pub async fn equalize_timing(password: String) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || {
        let stored = REFERENCE_HASH
            .get_or_init(|| hash_password("portal-auth.reference").unwrap_or_default());
        let _ = verify_password(&password, stored);
    })
    .await
    .map_err(|e| AppError::Internal(format!("verify task failed: {e}")))
}
