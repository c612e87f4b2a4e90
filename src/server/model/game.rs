//! Game domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::game::{CreateGameDto, GameDto};

/// A game that purchases and articles refer to.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i32,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Game {
    pub fn into_dto(self) -> GameDto {
        GameDto {
            id: self.id,
            name: self.name,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a game domain model at the repository boundary.
    pub fn from_entity(entity: entity::game::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a game.
#[derive(Debug, Clone)]
pub struct CreateGameParams {
    pub name: String,
    pub image_url: Option<String>,
}

impl CreateGameParams {
    pub fn from_dto(dto: CreateGameDto) -> Self {
        Self {
            name: dto.name,
            image_url: dto.image_url,
        }
    }
}
