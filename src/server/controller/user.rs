use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateMeDto, UpdatePasswordDto, UpdateUserDto, UserDto, UserWithActivityDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::user::{UpdateUserParam, UserWithActivity},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get every user with their purchases and sales.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - All users
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - There are no users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user/get/all",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserWithActivityDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Users not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all_users().await?;
    let users_dto: Vec<_> = users.into_iter().map(UserWithActivity::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get the authenticated user.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The caller's account
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/user/get/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's account", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user by ID.
///
/// # Access Control
/// - `Admin` - Only admins can look up other users
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/user/get/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_user(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the authenticated user's profile.
///
/// # Access Control
/// - Any authenticated user, on their own account; the role cannot be changed here
///
/// # Returns
/// - `200 OK` - The updated account
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `409 Conflict` - Email or username already taken
#[utoipa::path(
    put,
    path = "/user/update/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdateMeDto,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid update data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Email or username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<UpdateMeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db)
        .update_user(user.id, UpdateUserParam::from_me_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Change the authenticated user's password.
///
/// # Access Control
/// - Any authenticated user, on their own account
///
/// # Returns
/// - `200 OK` - The account, without any password field
/// - `400 Bad Request` - Password failed validation
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    put,
    path = "/user/update/me/password",
    tag = USER_TAG,
    security(("bearer" = [])),
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = UserDto),
        (status = 400, description = "Invalid password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_password(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db)
        .update_password(user.id, payload.password, state.bcrypt_cost)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update any user, including their role.
///
/// # Access Control
/// - `Admin` - Only admins can update other users
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Payload failed validation or unknown role
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No user with that ID
/// - `409 Conflict` - Email or username already taken
#[utoipa::path(
    put,
    path = "/user/update/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid update data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Email or username already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_by_id(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let param = UpdateUserParam::from_admin_dto(payload)?;
    let user = UserService::new(&state.db).update_user(id, param).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user and everything they own.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/user/delete/{id}",
    tag = USER_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user_by_id(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).delete_user(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
