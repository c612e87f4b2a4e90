//! Purchase domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::purchase::{CreatePurchaseDto, PurchaseDto},
    server::model::game::Game,
};

/// Record of how the owner acquired a game account or item.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    /// Price the owner paid, in cents. Private to the owner.
    pub purchased_price: i64,
    /// Where the owner acquired it. Private to the owner.
    pub origin: String,
    pub created_at: DateTime<Utc>,
}

impl Purchase {
    /// Converts an entity model to a purchase domain model at the repository boundary.
    pub fn from_entity(entity: entity::purchase::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            game_id: entity.game_id,
            purchased_price: entity.purchased_price,
            origin: entity.origin,
            created_at: entity.created_at,
        }
    }
}

/// Purchase together with the game it is for.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseWithGame {
    pub purchase: Purchase,
    pub game: Option<Game>,
}

impl PurchaseWithGame {
    /// Converts to a DTO including every field, for the owner.
    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.purchase.id,
            user_id: self.purchase.user_id,
            game_id: self.purchase.game_id,
            purchased_price: Some(self.purchase.purchased_price),
            origin: Some(self.purchase.origin),
            created_at: self.purchase.created_at,
            game: self.game.map(Game::into_dto),
        }
    }

    /// Converts to a DTO without `purchased_price` and `origin`, for everyone else.
    pub fn into_public_dto(self) -> PurchaseDto {
        PurchaseDto {
            purchased_price: None,
            origin: None,
            ..self.into_dto()
        }
    }
}

/// Parameters for recording a purchase.
#[derive(Debug, Clone)]
pub struct CreatePurchaseParams {
    pub user_id: i32,
    pub game_id: i32,
    pub purchased_price: i64,
    pub origin: String,
}

impl CreatePurchaseParams {
    pub fn from_dto(user_id: i32, dto: CreatePurchaseDto) -> Self {
        Self {
            user_id,
            game_id: dto.game_id,
            purchased_price: dto.purchased_price,
            origin: dto.origin,
        }
    }
}
