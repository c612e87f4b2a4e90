//! Authentication domain models.

use serde::{Deserialize, Serialize};

use crate::model::auth::{AccessTokenDto, LoginDto, RegisterDto};

/// Claims carried by every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// ID of the authenticated user.
    pub sub: i32,
    /// Email of the user at signing time.
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn into_dto(self) -> AccessTokenDto {
        AccessTokenDto {
            access_token: self.0,
        }
    }
}

/// Parameters for registering a new account.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub email: String,
    pub username: String,
    /// Plain-text password, hashed by the auth service before storage.
    pub password: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Self {
        Self {
            email: dto.email,
            username: dto.username,
            password: dto.password,
        }
    }
}

/// Parameters for logging in.
#[derive(Debug, Clone)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

impl LoginParams {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}
