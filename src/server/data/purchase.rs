//! Purchase data repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    game::Game,
    purchase::{CreatePurchaseParams, Purchase, PurchaseWithGame},
};

pub struct PurchaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseRepository<'a> {
    /// Creates a new PurchaseRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PurchaseRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a purchase.
    ///
    /// # Arguments
    /// - `params` - Owner, game, price paid and origin
    ///
    /// # Returns
    /// - `Ok(Purchase)` - The created purchase
    /// - `Err(DbErr)` - Foreign key violation for an unknown game, or other database error
    pub async fn create(&self, params: CreatePurchaseParams) -> Result<Purchase, DbErr> {
        let entity = entity::purchase::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            game_id: ActiveValue::Set(params.game_id),
            purchased_price: ActiveValue::Set(params.purchased_price),
            origin: ActiveValue::Set(params.origin),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Purchase::from_entity(entity))
    }

    /// Finds a purchase by ID.
    ///
    /// # Arguments
    /// - `id` - Purchase ID
    ///
    /// # Returns
    /// - `Ok(Some(Purchase))` - Purchase found
    /// - `Ok(None)` - No purchase with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Purchase>, DbErr> {
        let entity = entity::prelude::Purchase::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Purchase::from_entity))
    }

    /// Gets a user's purchases with their games, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the purchases
    ///
    /// # Returns
    /// - `Ok(Vec<PurchaseWithGame>)` - The user's purchases, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_with_game(
        &self,
        user_id: i32,
    ) -> Result<Vec<PurchaseWithGame>, DbErr> {
        let purchases = entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::UserId.eq(user_id))
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .order_by_desc(entity::purchase::Column::Id)
            .all(self.db)
            .await?;

        self.attach_games(purchases.into_iter().map(Purchase::from_entity).collect())
            .await
    }

    /// Loads purchases by ID together with their games.
    ///
    /// # Arguments
    /// - `ids` - Purchase IDs to load
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, PurchaseWithGame>)` - Purchases keyed by ID; unknown IDs are absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_with_game_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, PurchaseWithGame>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let purchases = entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(self
            .attach_games(purchases.into_iter().map(Purchase::from_entity).collect())
            .await?
            .into_iter()
            .map(|p| (p.purchase.id, p))
            .collect())
    }

    async fn attach_games(
        &self,
        purchases: Vec<Purchase>,
    ) -> Result<Vec<PurchaseWithGame>, DbErr> {
        let mut game_ids: Vec<i32> = purchases.iter().map(|p| p.game_id).collect();
        game_ids.sort_unstable();
        game_ids.dedup();

        let games: HashMap<i32, Game> = if game_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Game::find()
                .filter(entity::game::Column::Id.is_in(game_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, Game::from_entity(g)))
                .collect()
        };

        Ok(purchases
            .into_iter()
            .map(|purchase| PurchaseWithGame {
                game: games.get(&purchase.game_id).cloned(),
                purchase,
            })
            .collect())
    }
}
