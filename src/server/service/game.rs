//! Game catalogue service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::{db::DbErrorMap, AppError},
    model::game::{CreateGameParams, Game},
};

const GAME_WRITE_ERRORS: DbErrorMap<'static> =
    DbErrorMap::new().unique_fallback("Game already exists");

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists games sorted by name.
    ///
    /// # Arguments
    /// - `name` - Optional case-insensitive name fragment
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Matching games, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_games(&self, name: Option<&str>) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all(name).await?)
    }

    /// Adds a game to the catalogue.
    ///
    /// # Arguments
    /// - `params` - Name and optional image URL
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(AppError::Conflict)` - A game with that name exists
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create_game(&self, params: CreateGameParams) -> Result<Game, AppError> {
        GameRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| GAME_WRITE_ERRORS.translate(e))
    }
}
