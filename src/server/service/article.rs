//! Article service for business logic.
//!
//! This module provides the `ArticleService`, which lists, creates, updates and deletes
//! articles. Listings come back with their relations loaded; whether the purchase's price
//! and origin are shown is decided by the controller when it converts to DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        article::{ArticleRelations, ArticleRepository},
        purchase::PurchaseRepository,
        sale::SaleRepository,
    },
    error::{
        db::{DbErrorMap, ErrorCategory},
        AppError,
    },
    model::article::{
        Article, ArticleDetails, ArticleFilter, CreateArticleParams, UpdateArticleParams,
    },
};

const ARTICLE_CREATE_ERRORS: DbErrorMap<'static> = DbErrorMap::new()
    .unique_fallback("Article already exists")
    .foreign_key(ErrorCategory::NotFound, "Purchase not found");

const ARTICLE_DELETE_ERRORS: DbErrorMap<'static> =
    DbErrorMap::new().foreign_key(ErrorCategory::Conflict, "Article has already been sold");

/// Service providing business logic for article listings.
pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    /// Creates a new ArticleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ArticleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every available article with its purchase, game and seller.
    ///
    /// # Arguments
    /// - `name` - Optional case-insensitive game name fragment
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleDetails>)` - Available articles, newest first, never empty
    /// - `Err(AppError::NotFound)` - No article matches
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_available_articles(
        &self,
        name: Option<String>,
    ) -> Result<Vec<ArticleDetails>, AppError> {
        self.list(
            ArticleFilter::available(name),
            ArticleRelations::LISTING,
            "No articles found",
        )
        .await
    }

    /// Lists the caller's available articles with purchase and game.
    ///
    /// # Arguments
    /// - `user_id` - The caller
    /// - `name` - Optional case-insensitive game name fragment
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleDetails>)` - The caller's available articles, never empty
    /// - `Err(AppError::NotFound)` - No article matches
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_my_articles(
        &self,
        user_id: i32,
        name: Option<String>,
    ) -> Result<Vec<ArticleDetails>, AppError> {
        self.list(
            ArticleFilter::available(name).owned_by(user_id),
            ArticleRelations::PURCHASE,
            "No user articles found",
        )
        .await
    }

    /// Lists the caller's sold articles with purchase, game and sale.
    ///
    /// # Arguments
    /// - `user_id` - The caller
    /// - `name` - Optional case-insensitive game name fragment
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleDetails>)` - The caller's sold articles, never empty
    /// - `Err(AppError::NotFound)` - No article matches
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_my_sold_articles(
        &self,
        user_id: i32,
        name: Option<String>,
    ) -> Result<Vec<ArticleDetails>, AppError> {
        self.list(
            ArticleFilter::available(name).owned_by(user_id).sold(),
            ArticleRelations::PURCHASE_AND_SALE,
            "No user articles found",
        )
        .await
    }

    /// Gets one of the caller's articles with all relations.
    ///
    /// # Arguments
    /// - `user_id` - The caller
    /// - `id` - Article ID
    ///
    /// # Returns
    /// - `Ok(ArticleDetails)` - The article
    /// - `Err(AppError::NotFound)` - No article with that ID
    /// - `Err(AppError::Forbidden)` - The article belongs to another user
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_my_article_by_id(
        &self,
        user_id: i32,
        id: i32,
    ) -> Result<ArticleDetails, AppError> {
        let details = self.get_article_by_id(id).await?;
        if details.article.user_id != user_id {
            return Err(AppError::Forbidden(
                "You are not allowed to see this article".to_string(),
            ));
        }

        Ok(details)
    }

    /// Gets any article with all relations.
    ///
    /// # Arguments
    /// - `id` - Article ID
    ///
    /// # Returns
    /// - `Ok(ArticleDetails)` - The article
    /// - `Err(AppError::NotFound)` - No article with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_article_by_id(&self, id: i32) -> Result<ArticleDetails, AppError> {
        let repo = ArticleRepository::new(self.db);
        let article = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No article found".to_string()))?;

        repo.load_details(vec![article], ArticleRelations::ALL)
            .await?
            .pop()
            .ok_or_else(|| AppError::NotFound("No article found".to_string()))
    }

    /// Lists one of the caller's purchases as an article.
    ///
    /// # Arguments
    /// - `params` - Owner, purchase and listing fields
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article
    /// - `Err(AppError::NotFound)` - The purchase does not exist
    /// - `Err(AppError::Forbidden)` - The purchase belongs to another user
    /// - `Err(AppError::Conflict)` - The purchase already has an article
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn create_article(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        let purchase = PurchaseRepository::new(self.db)
            .find_by_id(params.purchase_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Purchase not found".to_string()))?;

        if purchase.user_id != params.user_id {
            return Err(AppError::Forbidden(
                "You are not allowed to sell this purchase".to_string(),
            ));
        }

        ArticleRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| ARTICLE_CREATE_ERRORS.translate(e))
    }

    /// Updates one of the caller's articles.
    ///
    /// # Arguments
    /// - `user_id` - The caller
    /// - `id` - Article ID
    /// - `params` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Article)` - The updated article
    /// - `Err(AppError::NotFound)` - No article with that ID owned by the caller
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_article(
        &self,
        user_id: i32,
        id: i32,
        params: UpdateArticleParams,
    ) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .update_owned(id, user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
    }

    /// Deletes one of the caller's available articles.
    ///
    /// # Arguments
    /// - `user_id` - The caller
    /// - `id` - Article ID
    ///
    /// # Returns
    /// - `Ok(Article)` - The deleted article
    /// - `Err(AppError::NotFound)` - No article with that ID owned by the caller
    /// - `Err(AppError::Conflict)` - The article has a sale
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_article(&self, user_id: i32, id: i32) -> Result<Article, AppError> {
        let repo = ArticleRepository::new(self.db);
        let owned = repo
            .find_by_id(id)
            .await?
            .filter(|article| article.user_id == user_id)
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))?;

        if SaleRepository::new(self.db)
            .find_by_article_id(owned.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Article has already been sold".to_string(),
            ));
        }

        repo.delete_owned(id, user_id)
            .await
            .map_err(|e| ARTICLE_DELETE_ERRORS.translate(e))?
            .ok_or_else(|| AppError::NotFound("Article not found".to_string()))
    }

    async fn list(
        &self,
        filter: ArticleFilter,
        relations: ArticleRelations,
        empty_message: &str,
    ) -> Result<Vec<ArticleDetails>, AppError> {
        let repo = ArticleRepository::new(self.db);
        let articles = repo.find(&filter).await?;
        if articles.is_empty() {
            return Err(AppError::NotFound(empty_message.to_string()));
        }

        Ok(repo.load_details(articles, relations).await?)
    }
}
