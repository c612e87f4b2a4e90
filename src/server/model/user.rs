//! User domain models and parameters.
//!
//! Provides the user domain model without its password hash, the role hierarchy used by
//! the auth guard, and parameter types for account creation and updates.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UpdateMeDto, UpdateUserDto, UserDto, UserWithActivityDto},
    server::{
        error::AppError,
        model::{
            purchase::{Purchase, PurchaseWithGame},
            sale::Sale,
        },
    },
};

/// Account role, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Buyer,
    #[default]
    Seller,
    Admin,
}

impl Role {
    /// Parses a stored or submitted role name.
    ///
    /// # Arguments
    /// - `value` - Lowercase role name
    ///
    /// # Returns
    /// - `Some(Role)` - Known role
    /// - `None` - Unknown role name
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "buyer" => Some(Self::Buyer),
            "seller" => Some(Self::Seller),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
            Self::Admin => "admin",
        }
    }

    /// Whether a user with this role may access something that requires `required`.
    ///
    /// Admins satisfy every requirement.
    pub fn satisfies(&self, required: Role) -> bool {
        *self == Self::Admin || *self == required
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registered account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub avatar_url: Option<String>,
    pub role: Role,
    /// Cart currently in use, set during registration.
    pub active_cart_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO with the role as its lowercase name
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            avatar_url: self.avatar_url,
            role: self.role.as_str().to_string(),
            active_cart_id: self.active_cart_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The password hash is dropped here. A role name the application does not know
    /// degrades to `Buyer`, the least privileged role.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let role = Role::parse(&entity.role).unwrap_or_else(|| {
            tracing::warn!(
                "User {} has unknown role {:?}, treating as buyer",
                entity.id,
                entity.role
            );
            Role::Buyer
        });

        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            avatar_url: entity.avatar_url,
            role,
            active_cart_id: entity.active_cart_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// User together with everything they bought and sold, for the admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithActivity {
    pub user: User,
    pub purchases: Vec<Purchase>,
    pub sales: Vec<Sale>,
}

impl UserWithActivity {
    pub fn into_dto(self) -> UserWithActivityDto {
        UserWithActivityDto {
            user: self.user.into_dto(),
            purchases: self
                .purchases
                .into_iter()
                .map(|purchase| PurchaseWithGame {
                    purchase,
                    game: None,
                }
                .into_dto())
                .collect(),
            sales: self.sales.into_iter().map(Sale::into_dto).collect(),
        }
    }
}

/// Login lookup result: the user plus the stored hash to verify against.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub hashed_password: String,
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
}

/// Parameters for a partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub email: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParam {
    /// Builds update parameters from a self-service update; the role cannot change.
    pub fn from_me_dto(dto: UpdateMeDto) -> Self {
        Self {
            email: dto.email,
            username: dto.username,
            avatar_url: dto.avatar_url,
            role: None,
        }
    }

    /// Builds update parameters from an admin update.
    ///
    /// # Arguments
    /// - `dto` - Admin update payload, possibly carrying a new role name
    ///
    /// # Returns
    /// - `Ok(UpdateUserParam)` - Parsed parameters
    /// - `Err(AppError::BadRequest)` - Role name is not `buyer`, `seller` or `admin`
    pub fn from_admin_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        let role = match dto.role {
            Some(name) => Some(
                Role::parse(&name)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown role: {}", name)))?,
            ),
            None => None,
        };

        Ok(Self {
            email: dto.email,
            username: dto.username,
            avatar_url: dto.avatar_url,
            role,
        })
    }
}
