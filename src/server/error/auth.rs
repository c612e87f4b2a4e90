use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, format or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token is valid but the user it names no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotFound(i32),

    /// User lacks the role an endpoint requires.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Description of the missing permission, logged but not returned to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an email that has no account.
    #[error("Credentials incorrect")]
    CredentialsIncorrect,

    /// Login attempted with the wrong password.
    #[error("Invalid password")]
    InvalidPassword,

    /// Signing a new token failed.
    #[error("Failed to sign access token: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotFound` → 401 Unauthorized
/// - `InvalidPassword` → 401 Unauthorized with "Invalid password"
/// - `AccessDenied` → 403 Forbidden
/// - `CredentialsIncorrect` → 403 Forbidden with "Credentials incorrect"
/// - `TokenCreation` → 500 Internal Server Error
///
/// Details about denied users and broken tokens are logged at debug level; the client only
/// sees a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::InvalidToken(_) | Self::UserNotFound(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::InvalidPassword => (StatusCode::UNAUTHORIZED, "Invalid password"),
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (StatusCode::FORBIDDEN, "Forbidden resource")
            }
            Self::CredentialsIncorrect => (StatusCode::FORBIDDEN, "Credentials incorrect"),
            Self::TokenCreation(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
