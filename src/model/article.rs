use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{purchase::PurchaseDto, sale::SaleDto};

/// An article with whichever relations the endpoint includes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i32,
    pub user_id: i32,
    pub purchase_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<PurchaseDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale: Option<SaleDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerDto>,
}

/// Article fields without relations, used inside a seller summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i32,
    pub purchase_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

/// Public view of the user selling an article, with their other available articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SellerDto {
    pub id: i32,
    pub username: String,
    pub avatar_url: Option<String>,
    pub articles: Vec<ArticleSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateArticleDto {
    pub purchase_id: i32,
    #[validate(length(min = 1, max = 120, message = "Title must be 1 to 120 characters"))]
    pub title: String,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    /// Asking price, in cents.
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateArticleDto {
    #[validate(length(min = 1, max = 120, message = "Title must be 1 to 120 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub price: Option<i64>,
}
