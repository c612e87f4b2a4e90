//! Article data repository for database operations.
//!
//! This module provides the `ArticleRepository` for listing, creating, updating and deleting
//! articles. Listings filter on sale state (a left join to `sale`), owner and game name (a
//! join through `purchase` to `game`). Relations are attached afterwards by
//! [`ArticleRepository::load_details`], one query per relation for the whole page of
//! articles.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::server::{
    data::{game::game_name_contains, purchase::PurchaseRepository},
    model::{
        article::{
            Article, ArticleDetails, ArticleFilter, CreateArticleParams, SaleState, Seller,
            UpdateArticleParams,
        },
        sale::Sale,
    },
};

/// Relations `load_details` attaches to each article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleRelations {
    /// Purchase with its game.
    pub purchase: bool,
    pub sale: bool,
    /// Seller profile with the seller's available articles.
    pub seller: bool,
}

impl ArticleRelations {
    pub const ALL: Self = Self {
        purchase: true,
        sale: true,
        seller: true,
    };

    /// Purchase and seller, for public listings of available articles.
    pub const LISTING: Self = Self {
        purchase: true,
        sale: false,
        seller: true,
    };

    /// Purchase only, for the owner's own available articles.
    pub const PURCHASE: Self = Self {
        purchase: true,
        sale: false,
        seller: false,
    };

    /// Purchase and sale, for the owner's sold articles.
    pub const PURCHASE_AND_SALE: Self = Self {
        purchase: true,
        sale: true,
        seller: false,
    };
}

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ArticleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists articles matching a filter, newest first.
    ///
    /// Ties on `created_at` are broken by descending ID so the order is stable.
    ///
    /// # Arguments
    /// - `filter` - Sale state, optional owner and optional game name substring
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Matching articles, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, filter: &ArticleFilter) -> Result<Vec<Article>, DbErr> {
        let mut query = with_sale_state(entity::prelude::Article::find(), filter.state);

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::article::Column::UserId.eq(user_id));
        }

        if let Some(name) = filter.game_name.as_deref() {
            query = query
                .join(
                    JoinType::InnerJoin,
                    entity::article::Relation::Purchase.def(),
                )
                .join(JoinType::InnerJoin, entity::purchase::Relation::Game.def())
                .filter(game_name_contains(name));
        }

        let articles = query
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .all(self.db)
            .await?;

        Ok(articles.into_iter().map(Article::from_entity).collect())
    }

    /// Finds an article by ID.
    ///
    /// # Arguments
    /// - `id` - Article ID
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Article::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Inserts a new article.
    ///
    /// # Arguments
    /// - `params` - Owner, purchase and listing fields
    ///
    /// # Returns
    /// - `Ok(Article)` - The created article
    /// - `Err(DbErr)` - Unique violation when the purchase already has an article, foreign
    ///   key violation when the purchase does not exist, or other database error
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, DbErr> {
        let now = Utc::now();
        let entity = entity::article::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            purchase_id: ActiveValue::Set(params.purchase_id),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    /// Updates an article owned by the given user.
    ///
    /// The lookup matches both `id` and `user_id`, so another user's article behaves
    /// exactly like a missing one.
    ///
    /// # Arguments
    /// - `id` - Article ID
    /// - `user_id` - Expected owner
    /// - `params` - Fields to change
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The updated article
    /// - `Ok(None)` - No article with that ID owned by that user
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_owned(
        &self,
        id: i32,
        user_id: i32,
        params: UpdateArticleParams,
    ) -> Result<Option<Article>, DbErr> {
        let Some(entity) = self.find_owned_model(id, user_id).await? else {
            return Ok(None);
        };

        let mut article: entity::article::ActiveModel = entity.into();
        if let Some(title) = params.title {
            article.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            article.description = ActiveValue::Set(Some(description));
        }
        if let Some(price) = params.price {
            article.price = ActiveValue::Set(price);
        }
        article.updated_at = ActiveValue::Set(Utc::now());

        let entity = article.update(self.db).await?;

        Ok(Some(Article::from_entity(entity)))
    }

    /// Deletes an article owned by the given user.
    ///
    /// # Arguments
    /// - `id` - Article ID
    /// - `user_id` - Expected owner
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The deleted article
    /// - `Ok(None)` - No article with that ID owned by that user
    /// - `Err(DbErr)` - Foreign key violation when a sale still references the article,
    ///   or other database error
    pub async fn delete_owned(&self, id: i32, user_id: i32) -> Result<Option<Article>, DbErr> {
        let Some(entity) = self.find_owned_model(id, user_id).await? else {
            return Ok(None);
        };

        entity.clone().delete(self.db).await?;

        Ok(Some(Article::from_entity(entity)))
    }

    /// Attaches the requested relations to a list of articles, preserving order.
    ///
    /// Runs at most one query per requested relation regardless of how many articles are
    /// passed (two for purchases, which also load their games).
    ///
    /// # Arguments
    /// - `articles` - Articles to enrich
    /// - `relations` - Which relations to load
    ///
    /// # Returns
    /// - `Ok(Vec<ArticleDetails>)` - One entry per input article
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn load_details(
        &self,
        articles: Vec<Article>,
        relations: ArticleRelations,
    ) -> Result<Vec<ArticleDetails>, DbErr> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let mut purchases = if relations.purchase {
            PurchaseRepository::new(self.db)
                .get_with_game_by_ids(articles.iter().map(|a| a.purchase_id).collect())
                .await?
        } else {
            HashMap::new()
        };

        let mut sales = if relations.sale {
            self.sales_by_article(articles.iter().map(|a| a.id).collect())
                .await?
        } else {
            HashMap::new()
        };

        let sellers = if relations.seller {
            self.sellers_by_id(articles.iter().map(|a| a.user_id).collect())
                .await?
        } else {
            HashMap::new()
        };

        Ok(articles
            .into_iter()
            .map(|article| ArticleDetails {
                purchase: purchases.remove(&article.purchase_id),
                sale: sales.remove(&article.id),
                seller: sellers.get(&article.user_id).cloned(),
                article,
            })
            .collect())
    }

    async fn find_owned_model(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::article::Model>, DbErr> {
        entity::prelude::Article::find_by_id(id)
            .filter(entity::article::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    async fn sales_by_article(&self, article_ids: Vec<i32>) -> Result<HashMap<i32, Sale>, DbErr> {
        let sales = entity::prelude::Sale::find()
            .filter(entity::sale::Column::ArticleId.is_in(article_ids))
            .all(self.db)
            .await?;

        Ok(sales
            .into_iter()
            .map(|s| (s.article_id, Sale::from_entity(s)))
            .collect())
    }

    /// Loads seller profiles with each seller's available articles.
    async fn sellers_by_id(&self, mut user_ids: Vec<i32>) -> Result<HashMap<i32, Seller>, DbErr> {
        user_ids.sort_unstable();
        user_ids.dedup();

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.clone()))
            .all(self.db)
            .await?;

        let mut articles: HashMap<i32, Vec<Article>> = HashMap::new();
        for article in with_sale_state(entity::prelude::Article::find(), SaleState::Available)
            .filter(entity::article::Column::UserId.is_in(user_ids))
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id)
            .all(self.db)
            .await?
        {
            articles
                .entry(article.user_id)
                .or_default()
                .push(Article::from_entity(article));
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let seller = Seller {
                    id: user.id,
                    username: user.username,
                    avatar_url: user.avatar_url,
                    articles: articles.remove(&user.id).unwrap_or_default(),
                };
                (seller.id, seller)
            })
            .collect())
    }
}

/// Restricts an article query to available or sold articles.
fn with_sale_state(
    query: Select<entity::article::Entity>,
    state: SaleState,
) -> Select<entity::article::Entity> {
    let query = query.join(JoinType::LeftJoin, entity::article::Relation::Sale.def());

    match state {
        SaleState::Available => query.filter(entity::sale::Column::Id.is_null()),
        SaleState::Sold => query.filter(entity::sale::Column::Id.is_not_null()),
    }
}
