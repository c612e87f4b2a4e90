use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDto},
    },
    server::{
        controller::param::NameFilterParam,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::game::{CreateGameParams, Game},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// List games, optionally filtered by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `filter` - Optional case-insensitive name filter
///
/// # Returns
/// - `200 OK` - Matching games ordered by name, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/game/get/all",
    tag = GAME_TAG,
    params(NameFilterParam),
    responses(
        (status = 200, description = "Games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_games(
    State(state): State<AppState>,
    Query(filter): Query<NameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let name = filter.into_name();
    let games = GameService::new(&state.db)
        .get_all_games(name.as_deref())
        .await?;

    let games_dto: Vec<_> = games.into_iter().map(Game::into_dto).collect();

    Ok((StatusCode::OK, Json(games_dto)))
}

/// Add a game to the catalogue.
///
/// # Access Control
/// - `Admin` - Only admins can add games
///
/// # Returns
/// - `201 Created` - The new game
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
/// - `409 Conflict` - A game with that name exists
#[utoipa::path(
    post,
    path = "/game/create",
    tag = GAME_TAG,
    security(("bearer" = [])),
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Game created", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Game already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let game = GameService::new(&state.db)
        .create_game(CreateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}
