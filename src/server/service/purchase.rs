//! Purchase service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::purchase::PurchaseRepository,
    error::{
        db::{DbErrorMap, ErrorCategory},
        AppError,
    },
    model::purchase::{CreatePurchaseParams, Purchase, PurchaseWithGame},
};

const PURCHASE_WRITE_ERRORS: DbErrorMap<'static> =
    DbErrorMap::new().foreign_key(ErrorCategory::NotFound, "Game not found");

pub struct PurchaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a purchase for the caller.
    ///
    /// # Arguments
    /// - `params` - Owner, game, price paid and origin
    ///
    /// # Returns
    /// - `Ok(Purchase)` - The created purchase
    /// - `Err(AppError::NotFound)` - The game does not exist
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create_purchase(
        &self,
        params: CreatePurchaseParams,
    ) -> Result<Purchase, AppError> {
        PurchaseRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| PURCHASE_WRITE_ERRORS.translate(e))
    }

    /// Lists the caller's purchases with their games, newest first.
    pub async fn get_my_purchases(&self, user_id: i32) -> Result<Vec<PurchaseWithGame>, AppError> {
        Ok(PurchaseRepository::new(self.db)
            .get_by_user_with_game(user_id)
            .await?)
    }
}
