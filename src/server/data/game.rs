//! Game data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::game::{CreateGameParams, Game};

/// Escape character for `LIKE` patterns built from user input.
const LIKE_ESCAPE: char = '\\';

/// Condition matching games whose name contains `name`, ignoring ASCII case.
///
/// `%` and `_` in `name` match literally. Only ASCII letters are folded, matching
/// SQLite's `LOWER`. Usable on any query that selects from or joins the game table.
pub fn game_name_contains(name: &str) -> Expr {
    let pattern = format!("%{}%", escape_like(&name.to_ascii_lowercase()));

    Expr::expr(Func::lower(Expr::col((
        entity::game::Entity,
        entity::game::Column::Name,
    ))))
    .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

/// Escapes `LIKE` wildcards and the escape character itself.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    /// Creates a new GameRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GameRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new game.
    ///
    /// # Arguments
    /// - `params` - Name and optional image URL
    ///
    /// # Returns
    /// - `Ok(Game)` - The created game
    /// - `Err(DbErr)` - Unique violation on name, or other database error
    pub async fn create(&self, params: CreateGameParams) -> Result<Game, DbErr> {
        let entity = entity::game::ActiveModel {
            name: ActiveValue::Set(params.name),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Game::from_entity(entity))
    }

    /// Gets all games sorted by name, optionally filtered by name.
    ///
    /// # Arguments
    /// - `name` - Case-insensitive substring the game name must contain
    ///
    /// # Returns
    /// - `Ok(Vec<Game>)` - Matching games, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Game>, DbErr> {
        let mut query = entity::prelude::Game::find();
        if let Some(name) = name {
            query = query.filter(game_name_contains(name));
        }

        let games = query
            .order_by_asc(entity::game::Column::Name)
            .all(self.db)
            .await?;

        Ok(games.into_iter().map(Game::from_entity).collect())
    }
}
