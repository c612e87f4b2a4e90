//! Sale factory for creating test sale entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Marks an article as sold by inserting a sale for it.
///
/// # Arguments
/// - `db` - Database connection
/// - `article` - Article being sold; its owner is recorded as the seller and its
///   asking price as the sold price
///
/// # Returns
/// - `Ok(entity::sale::Model)` - Created sale entity
/// - `Err(DbErr)` - Database error during insert (e.g. article already sold)
pub async fn create_sale(
    db: &DatabaseConnection,
    article: &entity::article::Model,
) -> Result<entity::sale::Model, DbErr> {
    entity::sale::ActiveModel {
        article_id: ActiveValue::Set(article.id),
        user_id: ActiveValue::Set(article.user_id),
        sold_price: ActiveValue::Set(article.price),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
