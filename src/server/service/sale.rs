//! Sale service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, sale::SaleRepository},
    error::{
        db::{DbErrorMap, ErrorCategory},
        AppError,
    },
    model::sale::{CreateSaleParams, Sale},
};

const SALE_WRITE_ERRORS: DbErrorMap<'static> = DbErrorMap::new()
    .unique_fallback("Article already sold")
    .foreign_key(ErrorCategory::NotFound, "No article found");

pub struct SaleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SaleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks one of the caller's articles as sold.
    ///
    /// The unique constraint on `sale.article_id` still guards against two concurrent
    /// sales of the same article passing the check below.
    ///
    /// # Arguments
    /// - `params` - Seller, article and final price
    ///
    /// # Returns
    /// - `Ok(Sale)` - The created sale
    /// - `Err(AppError::NotFound)` - The article does not exist
    /// - `Err(AppError::Forbidden)` - The article belongs to another user
    /// - `Err(AppError::Conflict)` - The article is already sold
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create_sale(&self, params: CreateSaleParams) -> Result<Sale, AppError> {
        let article = ArticleRepository::new(self.db)
            .find_by_id(params.article_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No article found".to_string()))?;

        if article.user_id != params.user_id {
            return Err(AppError::Forbidden(
                "You are not allowed to sell this article".to_string(),
            ));
        }

        let sale_repo = SaleRepository::new(self.db);
        if sale_repo.find_by_article_id(article.id).await?.is_some() {
            return Err(AppError::Conflict("Article already sold".to_string()));
        }

        let sale = sale_repo
            .create(params)
            .await
            .map_err(|e| SALE_WRITE_ERRORS.translate(e))?;

        tracing::info!("Article {} sold by user {}", sale.article_id, sale.user_id);

        Ok(sale)
    }
}
