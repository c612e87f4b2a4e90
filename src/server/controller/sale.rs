use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        sale::{CreateSaleDto, SaleDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::sale::CreateSaleParams,
        service::sale::SaleService,
        state::AppState,
    },
};

/// Tag for grouping sale endpoints in OpenAPI documentation
pub static SALE_TAG: &str = "sale";

/// Mark one of the caller's articles as sold.
///
/// Once recorded, the article no longer appears among available articles and can no
/// longer be deleted.
///
/// # Access Control
/// - `Seller` - Only the article's owner can record its sale
///
/// # Returns
/// - `201 Created` - The new sale
/// - `400 Bad Request` - Payload failed validation
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not a seller or does not own the article
/// - `404 Not Found` - Article does not exist
/// - `409 Conflict` - Article already sold
#[utoipa::path(
    post,
    path = "/sale/create",
    tag = SALE_TAG,
    security(("bearer" = [])),
    request_body = CreateSaleDto,
    responses(
        (status = 201, description = "Sale recorded", body = SaleDto),
        (status = 400, description = "Invalid sale data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the article's owner", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 409, description = "Article already sold", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_sale(
    State(state): State<AppState>,
    token: BearerToken,
    Json(payload): Json<CreateSaleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &token)
        .require(&[Permission::Seller])
        .await?;

    payload.validate()?;

    let sale = SaleService::new(&state.db)
        .create_sale(CreateSaleParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(sale.into_dto())))
}
