use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::game::GameDto;

/// A purchase as returned by the API.
///
/// `purchased_price` and `origin` are omitted from the JSON when the purchase is shown to
/// anyone but its owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseDto {
    pub id: i32,
    pub user_id: i32,
    pub game_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<GameDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePurchaseDto {
    pub game_id: i32,
    /// Price paid, in cents.
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub purchased_price: i64,
    #[validate(length(min = 1, max = 100, message = "Origin must be 1 to 100 characters"))]
    pub origin: String,
}
