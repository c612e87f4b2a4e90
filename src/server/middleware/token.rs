use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Raw bearer token from the `Authorization` header, if the request carried one.
///
/// Extraction never fails; a missing or malformed header yields `BearerToken(None)` and
/// `AuthGuard` reports it as 401 when the endpoint requires authentication.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    /// Parses an `Authorization` header value of the form `Bearer <token>`.
    pub fn from_header(value: &str) -> Self {
        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Self(token)
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(BearerToken::from_header)
            .unwrap_or_default())
    }
}
