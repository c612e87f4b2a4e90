//! Sale domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::sale::{CreateSaleDto, SaleDto};

/// Record marking an article as sold.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub id: i32,
    pub article_id: i32,
    /// Seller of the article.
    pub user_id: i32,
    /// Final price, in cents.
    pub sold_price: i64,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    pub fn into_dto(self) -> SaleDto {
        SaleDto {
            id: self.id,
            article_id: self.article_id,
            user_id: self.user_id,
            sold_price: self.sold_price,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a sale domain model at the repository boundary.
    pub fn from_entity(entity: entity::sale::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            user_id: entity.user_id,
            sold_price: entity.sold_price,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording a sale.
#[derive(Debug, Clone)]
pub struct CreateSaleParams {
    /// Seller, must own the article.
    pub user_id: i32,
    pub article_id: i32,
    pub sold_price: i64,
}

impl CreateSaleParams {
    pub fn from_dto(user_id: i32, dto: CreateSaleDto) -> Self {
        Self {
            user_id,
            article_id: dto.article_id,
            sold_price: dto.sold_price,
        }
    }
}
