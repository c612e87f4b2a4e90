use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleDto, CreateArticleDto, UpdateArticleDto},
    },
    server::{
        controller::param::NameFilterParam,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::article::{ArticleDetails, CreateArticleParams, UpdateArticleParams},
        service::article::ArticleService,
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// List every unsold article.
///
/// Each article carries its purchase with the game, and the seller with their other
/// available articles. The purchase price and origin are never included.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `filter` - Optional case-insensitive game name filter
///
/// # Returns
/// - `200 OK` - Available articles, newest first
/// - `404 Not Found` - No article matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/article/get/available",
    tag = ARTICLE_TAG,
    params(NameFilterParam),
    responses(
        (status = 200, description = "Available articles", body = Vec<ArticleDto>),
        (status = 404, description = "No articles found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_articles(
    State(state): State<AppState>,
    Query(filter): Query<NameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::new(&state.db)
        .get_all_available_articles(filter.into_name())
        .await?;

    let articles_dto: Vec<_> = articles
        .into_iter()
        .map(ArticleDetails::into_public_dto)
        .collect();

    Ok((StatusCode::OK, Json(articles_dto)))
}

/// List the caller's articles that are still for sale.
///
/// # Access Control
/// - `Seller` - Only sellers can list their own articles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `token` - Bearer token of the caller
/// - `filter` - Optional case-insensitive game name filter
///
/// # Returns
/// - `200 OK` - The caller's unsold articles with their purchases
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller
/// - `404 Not Found` - No article matches
#[utoipa::path(
    get,
    path = "/article/get/mine",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(NameFilterParam),
    responses(
        (status = 200, description = "The caller's unsold articles", body = Vec<ArticleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 404, description = "No articles found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_articles(
    State(state): State<AppState>,
    token: BearerToken,
    Query(filter): Query<NameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    let articles = ArticleService::new(&state.db)
        .get_my_articles(user.id, filter.into_name())
        .await?;

    let articles_dto: Vec<_> = articles.into_iter().map(ArticleDetails::into_dto).collect();

    Ok((StatusCode::OK, Json(articles_dto)))
}

/// List the caller's sold articles.
///
/// # Access Control
/// - `Seller` - Only sellers can list their own articles
///
/// # Returns
/// - `200 OK` - The caller's sold articles with their purchases and sales
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller
/// - `404 Not Found` - No article matches
#[utoipa::path(
    get,
    path = "/article/get/mine/solded",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(NameFilterParam),
    responses(
        (status = 200, description = "The caller's sold articles", body = Vec<ArticleDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 404, description = "No articles found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_sold_articles(
    State(state): State<AppState>,
    token: BearerToken,
    Query(filter): Query<NameFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    let articles = ArticleService::new(&state.db)
        .get_my_sold_articles(user.id, filter.into_name())
        .await?;

    let articles_dto: Vec<_> = articles.into_iter().map(ArticleDetails::into_dto).collect();

    Ok((StatusCode::OK, Json(articles_dto)))
}

/// Get one of the caller's articles.
///
/// # Access Control
/// - `Seller` - Only the owner can see the full article
///
/// # Returns
/// - `200 OK` - The article with its purchase and sale
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller or does not own the article
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    get,
    path = "/article/get/mine/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "The article", body = ArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_article_by_id(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    let article = ArticleService::new(&state.db)
        .get_my_article_by_id(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Get any article by ID.
///
/// The purchase price and origin are stripped from the response.
///
/// # Returns
/// - `200 OK` - The article with its purchase, sale and seller
/// - `404 Not Found` - No article with that ID
#[utoipa::path(
    get,
    path = "/article/get/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "The article", body = ArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::new(&state.db).get_article_by_id(id).await?;

    Ok((StatusCode::OK, Json(article.into_public_dto())))
}

/// Put one of the caller's purchases up for sale.
///
/// # Access Control
/// - `Seller` - Only the owner of the purchase can list it
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `token` - Bearer token of the caller
/// - `payload` - Purchase to sell, title, description and asking price
///
/// # Returns
/// - `201 Created` - The new article
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller or does not own the purchase
/// - `404 Not Found` - Purchase does not exist
/// - `409 Conflict` - The purchase already has an article
#[utoipa::path(
    post,
    path = "/article/create",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article created", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to sell this purchase", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Article already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    payload.validate()?;

    let article = ArticleService::new(&state.db)
        .create_article(CreateArticleParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(article.into_dto())))
}

/// Update one of the caller's articles.
///
/// Only the fields present in the payload are changed.
///
/// # Access Control
/// - `Seller` - Only the owner can update an article
///
/// # Returns
/// - `200 OK` - The updated article
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller
/// - `404 Not Found` - No article with that ID owned by the caller
#[utoipa::path(
    put,
    path = "/article/update/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article ID")),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid article data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    payload.validate()?;

    let article = ArticleService::new(&state.db)
        .update_article(user.id, id, UpdateArticleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}

/// Withdraw one of the caller's unsold articles.
///
/// # Access Control
/// - `Seller` - Only the owner can delete an article
///
/// # Returns
/// - `200 OK` - The deleted article
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller
/// - `404 Not Found` - No article with that ID owned by the caller
/// - `409 Conflict` - The article has already been sold
#[utoipa::path(
    delete,
    path = "/article/delete/{id}",
    tag = ARTICLE_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article deleted", body = ArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "Article already sold", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    let article = ArticleService::new(&state.db)
        .delete_article(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_dto())))
}
