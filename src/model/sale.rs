use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SaleDto {
    pub id: i32,
    pub article_id: i32,
    pub user_id: i32,
    pub sold_price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSaleDto {
    pub article_id: i32,
    /// Final price, in cents.
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub sold_price: i64,
}
