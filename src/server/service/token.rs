//! Access token signing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::server::{
    error::auth::AuthError,
    model::auth::{AccessToken, TokenClaims},
};

/// Signs and verifies HS256 access tokens with a shared secret.
///
/// Built once at startup from the configured secret and shared through `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by signing and verification
    /// - `expiration_days` - Lifetime of issued tokens
    ///
    /// # Returns
    /// - `TokenService` - New service instance
    pub fn new(secret: &str, expiration_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiration: Duration::days(expiration_days),
        }
    }

    /// Signs a token for a user.
    ///
    /// # Arguments
    /// - `user_id` - Subject of the token
    /// - `email` - Email of the user, carried as a claim
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Signed token expiring after the configured lifetime
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn sign(&self, user_id: i32, email: &str) -> Result<AccessToken, AuthError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiration).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        Ok(AccessToken(token))
    }

    /// Verifies a token's signature and expiry.
    ///
    /// # Arguments
    /// - `token` - Raw token without the `Bearer ` prefix
    ///
    /// # Returns
    /// - `Ok(TokenClaims)` - Claims of a valid token
    /// - `Err(AuthError::InvalidToken)` - Malformed, wrongly signed or expired token
    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AuthError::InvalidToken("token expired".to_string())
                }
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}
