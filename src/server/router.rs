use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::{article, auth, game, purchase, sale, upload, user},
    docs::openapi_json,
    state::AppState,
};

/// Builds the API routes.
///
/// # Arguments
/// - `max_upload_bytes` - Body size limit applied to the image upload route
///
/// # Returns
/// - `Router<AppState>` - Routes awaiting application state
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/user/get/all", get(user::get_all_users))
        .route("/user/get/me", get(user::get_me))
        .route("/user/get/{id}", get(user::get_user_by_id))
        .route("/user/update/me", put(user::update_me))
        .route("/user/update/me/password", put(user::update_my_password))
        .route("/user/update/{id}", put(user::update_user_by_id))
        .route("/user/delete/{id}", delete(user::delete_user_by_id))
        .route(
            "/article/get/available",
            get(article::get_available_articles),
        )
        .route("/article/get/mine", get(article::get_my_articles))
        .route(
            "/article/get/mine/solded",
            get(article::get_my_sold_articles),
        )
        .route("/article/get/mine/{id}", get(article::get_my_article_by_id))
        .route("/article/get/{id}", get(article::get_article_by_id))
        .route("/article/create", post(article::create_article))
        .route("/article/update/{id}", put(article::update_article))
        .route("/article/delete/{id}", delete(article::delete_article))
        .route("/game/get/all", get(game::get_all_games))
        .route("/game/create", post(game::create_game))
        .route("/purchase/create", post(purchase::create_purchase))
        .route("/purchase/get/mine", get(purchase::get_my_purchases))
        .route("/sale/create", post(sale::create_sale))
        .route(
            "/api/files/upload/image",
            post(upload::upload_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/files/{path}", get(upload::get_file))
        .route("/api/openapi.json", get(openapi_json))
}
