//! Game factory for creating test game entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test games.
pub struct GameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    image_url: Option<String>,
}

impl<'a> GameFactory<'a> {
    /// Creates a new GameFactory named `"Game {id}"` without an image.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Game {}", next_id()),
            image_url: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Builds and inserts the game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game::Model)` - Created game entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate name)
    pub async fn build(self) -> Result<entity::game::Model, DbErr> {
        entity::game::ActiveModel {
            name: ActiveValue::Set(self.name),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game with default values.
pub async fn create_game(db: &DatabaseConnection) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).build().await
}

/// Creates a game with a specific name.
pub async fn create_game_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::game::Model, DbErr> {
    GameFactory::new(db).name(name).build().await
}
