//! Sale data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::sale::{CreateSaleParams, Sale};

pub struct SaleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaleRepository<'a> {
    /// Creates a new SaleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SaleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a sale for an article.
    ///
    /// # Arguments
    /// - `params` - Seller, article and final price
    ///
    /// # Returns
    /// - `Ok(Sale)` - The created sale
    /// - `Err(DbErr)` - Unique violation when the article is already sold, foreign key
    ///   violation when it does not exist, or other database error
    pub async fn create(&self, params: CreateSaleParams) -> Result<Sale, DbErr> {
        let entity = entity::sale::ActiveModel {
            article_id: ActiveValue::Set(params.article_id),
            user_id: ActiveValue::Set(params.user_id),
            sold_price: ActiveValue::Set(params.sold_price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Sale::from_entity(entity))
    }

    /// Finds the sale of an article.
    ///
    /// # Arguments
    /// - `article_id` - Article ID
    ///
    /// # Returns
    /// - `Ok(Some(Sale))` - The article is sold
    /// - `Ok(None)` - The article is available
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_article_id(&self, article_id: i32) -> Result<Option<Sale>, DbErr> {
        let entity = entity::prelude::Sale::find()
            .filter(entity::sale::Column::ArticleId.eq(article_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Sale::from_entity))
    }
}
