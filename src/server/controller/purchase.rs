use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        purchase::{CreatePurchaseDto, PurchaseDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::purchase::{CreatePurchaseParams, PurchaseWithGame},
        service::purchase::PurchaseService,
        state::AppState,
    },
};

/// Tag for grouping purchase endpoints in OpenAPI documentation
pub static PURCHASE_TAG: &str = "purchase";

/// Record a game account the caller acquired.
///
/// # Access Control
/// - `Seller` - Purchases are recorded by sellers for later listing
///
/// # Returns
/// - `201 Created` - The new purchase
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller
/// - `404 Not Found` - Game does not exist
#[utoipa::path(
    post,
    path = "/purchase/create",
    tag = PURCHASE_TAG,
    security(("bearer" = [])),
    request_body = CreatePurchaseDto,
    responses(
        (status = 201, description = "Purchase recorded", body = PurchaseDto),
        (status = 400, description = "Invalid purchase data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreatePurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    payload.validate()?;

    let purchase = PurchaseService::new(&state.db)
        .create_purchase(CreatePurchaseParams::from_dto(user.id, payload))
        .await?;

    let purchase_dto = PurchaseWithGame {
        purchase,
        game: None,
    }
    .into_dto();

    Ok((StatusCode::CREATED, Json(purchase_dto)))
}

/// List the caller's purchases with their games.
///
/// # Access Control
/// - `Seller` - Only sellers have purchases
///
/// # Returns
/// - `200 OK` - The caller's purchases, newest first, possibly empty
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller
#[utoipa::path(
    get,
    path = "/purchase/get/mine",
    tag = PURCHASE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The caller's purchases", body = Vec<PurchaseDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a seller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_purchases(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    let purchases = PurchaseService::new(&state.db)
        .get_my_purchases(user.id)
        .await?;

    let purchases_dto: Vec<_> = purchases
        .into_iter()
        .map(PurchaseWithGame::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(purchases_dto)))
}
