//! Article domain models and parameters.
//!
//! An article is a listing tied to exactly one purchase. It is available while it has no
//! sale and sold once it has one. `ArticleDetails` carries whichever relations an endpoint
//! loads and decides, at conversion time, whether the purchase's private fields are shown.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        article::{ArticleDto, ArticleSummaryDto, CreateArticleDto, SellerDto, UpdateArticleDto},
        purchase::PurchaseDto,
    },
    server::model::{purchase::PurchaseWithGame, sale::Sale},
};

/// A listing of a game account or item.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i32,
    /// Owner and seller of the article.
    pub user_id: i32,
    pub purchase_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Asking price, in cents.
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Converts to a DTO without any relations.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            user_id: self.user_id,
            purchase_id: self.purchase_id,
            title: self.title,
            description: self.description,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
            purchase: None,
            sale: None,
            seller: None,
        }
    }

    pub fn into_summary_dto(self) -> ArticleSummaryDto {
        ArticleSummaryDto {
            id: self.id,
            purchase_id: self.purchase_id,
            title: self.title,
            description: self.description,
            price: self.price,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an article domain model at the repository boundary.
    pub fn from_entity(entity: entity::article::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            purchase_id: entity.purchase_id,
            title: entity.title,
            description: entity.description,
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Public profile of the user selling an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Seller {
    pub id: i32,
    pub username: String,
    pub avatar_url: Option<String>,
    /// The seller's available articles.
    pub articles: Vec<Article>,
}

impl Seller {
    pub fn into_dto(self) -> SellerDto {
        SellerDto {
            id: self.id,
            username: self.username,
            avatar_url: self.avatar_url,
            articles: self
                .articles
                .into_iter()
                .map(Article::into_summary_dto)
                .collect(),
        }
    }
}

/// Article with its loaded relations.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleDetails {
    pub article: Article,
    pub purchase: Option<PurchaseWithGame>,
    pub sale: Option<Sale>,
    pub seller: Option<Seller>,
}

impl ArticleDetails {
    /// Converts to a DTO for the article's owner, purchase fields included.
    pub fn into_dto(mut self) -> ArticleDto {
        let purchase = self.purchase.take().map(PurchaseWithGame::into_dto);
        self.into_dto_with(purchase)
    }

    /// Converts to a DTO for anyone, without the purchase's price and origin.
    pub fn into_public_dto(mut self) -> ArticleDto {
        let purchase = self.purchase.take().map(PurchaseWithGame::into_public_dto);
        self.into_dto_with(purchase)
    }

    fn into_dto_with(self, purchase: Option<PurchaseDto>) -> ArticleDto {
        let Self {
            article,
            sale,
            seller,
            ..
        } = self;

        ArticleDto {
            purchase,
            sale: sale.map(Sale::into_dto),
            seller: seller.map(Seller::into_dto),
            ..article.into_dto()
        }
    }
}

/// Which articles a listing query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleState {
    /// Articles without a sale.
    Available,
    /// Articles with a sale.
    Sold,
}

/// Filters for article listings.
#[derive(Debug, Clone)]
pub struct ArticleFilter {
    pub state: SaleState,
    /// Restricts to one seller's articles.
    pub user_id: Option<i32>,
    /// Case-insensitive substring of the game name.
    pub game_name: Option<String>,
}

impl ArticleFilter {
    /// Every available article, optionally filtered by game name.
    pub fn available(game_name: Option<String>) -> Self {
        Self {
            state: SaleState::Available,
            user_id: None,
            game_name,
        }
    }

    /// Restricts the filter to a single seller.
    pub fn owned_by(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Switches the filter to sold articles.
    pub fn sold(mut self) -> Self {
        self.state = SaleState::Sold;
        self
    }
}

/// Parameters for listing a purchase as an article.
#[derive(Debug, Clone)]
pub struct CreateArticleParams {
    pub user_id: i32,
    pub purchase_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
}

impl CreateArticleParams {
    pub fn from_dto(user_id: i32, dto: CreateArticleDto) -> Self {
        Self {
            user_id,
            purchase_id: dto.purchase_id,
            title: dto.title,
            description: dto.description,
            price: dto.price,
        }
    }
}

/// Partial article update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticleParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
}

impl UpdateArticleParams {
    pub fn from_dto(dto: UpdateArticleDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            price: dto.price,
        }
    }
}
