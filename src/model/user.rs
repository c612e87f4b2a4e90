use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{purchase::PurchaseDto, sale::SaleDto};

/// A user as returned by the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub role: String,
    pub active_cart_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user together with their purchases and sales, for the admin listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserWithActivityDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub purchases: Vec<PurchaseDto>,
    pub sales: Vec<SaleDto>,
}

/// Fields a user may change on their own account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMeDto {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 32, message = "Username must be 3 to 32 characters"))]
    pub username: Option<String>,
    pub avatar_url: Option<String>,
}

/// Fields an admin may change on any account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 32, message = "Username must be 3 to 32 characters"))]
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    /// One of `buyer`, `seller`, `admin`.
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePasswordDto {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}
