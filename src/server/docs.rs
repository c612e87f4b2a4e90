//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every `utoipa::path` handler and DTO schema into one document,
//! served as JSON at `/api/openapi.json`.

use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::model::{
    api::ErrorDto,
    article::{ArticleDto, ArticleSummaryDto, CreateArticleDto, SellerDto, UpdateArticleDto},
    auth::{AccessTokenDto, LoginDto, RegisterDto},
    game::{CreateGameDto, GameDto},
    purchase::{CreatePurchaseDto, PurchaseDto},
    sale::{CreateSaleDto, SaleDto},
    upload::{UploadImageForm, UploadedFileDto},
    user::{UpdateMeDto, UpdatePasswordDto, UpdateUserDto, UserDto, UserWithActivityDto},
};

/// Adds the bearer token scheme referenced by guarded endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Game market API",
        description = "Marketplace for reselling game accounts."
    ),
    paths(
        crate::server::controller::auth::register,
        crate::server::controller::auth::login,
        crate::server::controller::user::get_all_users,
        crate::server::controller::user::get_me,
        crate::server::controller::user::get_user_by_id,
        crate::server::controller::user::update_me,
        crate::server::controller::user::update_my_password,
        crate::server::controller::user::update_user_by_id,
        crate::server::controller::user::delete_user_by_id,
        crate::server::controller::article::get_available_articles,
        crate::server::controller::article::get_my_articles,
        crate::server::controller::article::get_my_sold_articles,
        crate::server::controller::article::get_my_article_by_id,
        crate::server::controller::article::get_article_by_id,
        crate::server::controller::article::create_article,
        crate::server::controller::article::update_article,
        crate::server::controller::article::delete_article,
        crate::server::controller::game::get_all_games,
        crate::server::controller::game::create_game,
        crate::server::controller::purchase::create_purchase,
        crate::server::controller::purchase::get_my_purchases,
        crate::server::controller::sale::create_sale,
        crate::server::controller::upload::upload_image,
        crate::server::controller::upload::get_file,
    ),
    components(schemas(
        ErrorDto,
        RegisterDto,
        LoginDto,
        AccessTokenDto,
        UserDto,
        UserWithActivityDto,
        UpdateMeDto,
        UpdatePasswordDto,
        UpdateUserDto,
        ArticleDto,
        ArticleSummaryDto,
        SellerDto,
        CreateArticleDto,
        UpdateArticleDto,
        GameDto,
        CreateGameDto,
        PurchaseDto,
        CreatePurchaseDto,
        SaleDto,
        CreateSaleDto,
        UploadedFileDto,
        UploadImageForm,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Accounts and profiles"),
        (name = "article", description = "Game accounts listed for sale"),
        (name = "game", description = "Game catalogue"),
        (name = "purchase", description = "Game accounts acquired by sellers"),
        (name = "sale", description = "Completed sales"),
        (name = "files", description = "Image uploads")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
