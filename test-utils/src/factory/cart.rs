//! Cart factory for creating test cart entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a cart owned by the given user.
///
/// Does not mark the cart active; set `active_cart_id` on the user for that.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the cart
///
/// # Returns
/// - `Ok(entity::cart::Model)` - Created cart entity
/// - `Err(DbErr)` - Database error during insert (e.g. unknown user)
pub async fn create_cart(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::cart::Model, DbErr> {
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
