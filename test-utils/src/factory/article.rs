//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db, user.id, purchase.id)
///     .title("Level 80 account")
///     .price(4999)
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    purchase_id: i32,
    title: String,
    description: Option<String>,
    price: i64,
    created_at: DateTime<Utc>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - description: `None`
    /// - price: `2500`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32, purchase_id: i32) -> Self {
        Self {
            db,
            user_id,
            purchase_id,
            title: format!("Article {}", next_id()),
            description: None,
            price: 2500,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Overrides the creation time, for tests asserting listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::article::Model)` - Created article entity
    /// - `Err(DbErr)` - Database error during insert (e.g. purchase already listed)
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            purchase_id: ActiveValue::Set(self.purchase_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    user_id: i32,
    purchase_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, user_id, purchase_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn creates_article_with_dependencies() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_market_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _game, purchase, article) =
            factory::helpers::create_article_with_dependencies(db).await?;

        assert_eq!(article.user_id, user.id);
        assert_eq!(article.purchase_id, purchase.id);
        assert_eq!(article.price, 2500);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_second_article_for_same_purchase() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_market_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (user, _game, purchase, _article) =
            factory::helpers::create_article_with_dependencies(db).await?;

        let result = create_article(db, user.id, purchase.id).await;

        assert!(result.is_err());

        Ok(())
    }
}
