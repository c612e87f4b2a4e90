use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AccessTokenDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::auth::{LoginParams, RegisterParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user with the `seller` role and an active cart, then returns an access
/// token for them.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Email, username and password
///
/// # Returns
/// - `201 Created` - Account created, access token returned
/// - `400 Bad Request` - Payload failed validation
/// - `409 Conflict` - Email or username already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AccessTokenDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email or username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost)
        .register(RegisterParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(token.into_dto())))
}

/// Log in with email and password.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Credentials accepted, access token returned
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Wrong password
/// - `403 Forbidden` - No account with that email
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AccessTokenDto),
        (status = 400, description = "Invalid login data", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 403, description = "Credentials incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let token = AuthService::new(&state.db, &state.tokens, state.bcrypt_cost)
        .login(LoginParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(token.into_dto())))
}
