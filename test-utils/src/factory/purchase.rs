//! Purchase factory for creating test purchase entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test purchases.
///
/// Defaults to a purchase price of 1000 cents acquired from `"Steam"`.
pub struct PurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    game_id: i32,
    purchased_price: i64,
    origin: String,
}

impl<'a> PurchaseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32, game_id: i32) -> Self {
        Self {
            db,
            user_id,
            game_id,
            purchased_price: 1000,
            origin: "Steam".to_string(),
        }
    }

    pub fn purchased_price(mut self, purchased_price: i64) -> Self {
        self.purchased_price = purchased_price;
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Builds and inserts the purchase entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::purchase::Model)` - Created purchase entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown user or game)
    pub async fn build(self) -> Result<entity::purchase::Model, DbErr> {
        entity::purchase::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            game_id: ActiveValue::Set(self.game_id),
            purchased_price: ActiveValue::Set(self.purchased_price),
            origin: ActiveValue::Set(self.origin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a purchase with default values.
pub async fn create_purchase(
    db: &DatabaseConnection,
    user_id: i32,
    game_id: i32,
) -> Result<entity::purchase::Model, DbErr> {
    PurchaseFactory::new(db, user_id, game_id).build().await
}
