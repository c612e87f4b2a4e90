//! Password hashing on the blocking thread pool.
//!
//! bcrypt is deliberately slow, so both hashing and verification run inside
//! `tokio::task::spawn_blocking` to keep the async workers free.

use crate::server::error::AppError;

/// Hashes a plain-text password with bcrypt.
///
/// # Arguments
/// - `password` - Plain-text password
/// - `cost` - bcrypt cost factor
///
/// # Returns
/// - `Ok(String)` - Hash in modular crypt format, salt included
/// - `Err(AppError::PasswordHashErr)` - Invalid cost
/// - `Err(AppError::JoinErr)` - Hashing task panicked
pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;

    Ok(hashed)
}

/// Checks a plain-text password against a stored bcrypt hash.
///
/// A stored value that is not a valid bcrypt hash never matches.
///
/// # Arguments
/// - `password` - Plain-text password from the login attempt
/// - `hashed` - Stored hash
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the hash is malformed
/// - `Err(AppError::JoinErr)` - Verification task panicked
pub async fn verify_password(password: String, hashed: String) -> Result<bool, AppError> {
    let result = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await?;

    Ok(result.unwrap_or_else(|e| {
        tracing::warn!("Stored password hash could not be parsed: {}", e);
        false
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_hashed_password() -> Result<(), AppError> {
        let hashed = hash_password("correct horse".to_string(), 4).await?;

        assert!(verify_password("correct horse".to_string(), hashed.clone()).await?);
        assert!(!verify_password("wrong horse".to_string(), hashed).await?);

        Ok(())
    }

    #[tokio::test]
    async fn malformed_hash_never_matches() -> Result<(), AppError> {
        let matches =
            verify_password("anything".to_string(), "not-a-bcrypt-hash".to_string()).await?;

        assert!(!matches);

        Ok(())
    }
}
