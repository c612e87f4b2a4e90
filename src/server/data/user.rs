//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles registration together with the user's first cart, lookups, profile and
//! password updates, and deletion, converting entity models to domain models at the
//! infrastructure boundary so password hashes only leave through `UserCredentials`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    purchase::Purchase,
    sale::Sale,
    user::{CreateUserParam, UpdateUserParam, User, UserCredentials, UserWithActivity},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user together with their active cart.
    ///
    /// Inserts the user, inserts a cart owned by the user, then points the user's
    /// `active_cart_id` at it, all inside one transaction. If any step fails the
    /// transaction is dropped uncommitted and neither row remains.
    ///
    /// # Arguments
    /// - `param` - Email, username, password hash and role of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with `active_cart_id` set
    /// - `Err(DbErr)` - Unique violation on email or username, or other database error
    pub async fn create_with_cart(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            username: ActiveValue::Set(param.username),
            hashed_password: ActiveValue::Set(param.hashed_password),
            avatar_url: ActiveValue::Set(None),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            active_cart_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let cart = entity::cart::ActiveModel {
            user_id: ActiveValue::Set(user.id),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut user: entity::user::ActiveModel = user.into();
        user.active_cart_id = ActiveValue::Set(Some(cart.id));
        let user = user.update(&txn).await?;

        txn.commit().await?;

        Ok(User::from_entity(user))
    }

    /// Finds a user by ID.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email, for login.
    ///
    /// # Arguments
    /// - `email` - Email the user registered with
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|entity| {
            let hashed_password = entity.hashed_password.clone();
            UserCredentials {
                user: User::from_entity(entity),
                hashed_password,
            }
        }))
    }

    /// Gets every user with their purchases and sales, ordered by ID.
    ///
    /// Purchases and sales are loaded with one query each and grouped by user in memory.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithActivity>)` - All users, possibly empty
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_all_with_activity(&self) -> Result<Vec<UserWithActivity>, DbErr> {
        let users = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();

        let mut purchases: HashMap<i32, Vec<Purchase>> = HashMap::new();
        for purchase in entity::prelude::Purchase::find()
            .filter(entity::purchase::Column::UserId.is_in(user_ids.clone()))
            .order_by_desc(entity::purchase::Column::CreatedAt)
            .all(self.db)
            .await?
        {
            purchases
                .entry(purchase.user_id)
                .or_default()
                .push(Purchase::from_entity(purchase));
        }

        let mut sales: HashMap<i32, Vec<Sale>> = HashMap::new();
        for sale in entity::prelude::Sale::find()
            .filter(entity::sale::Column::UserId.is_in(user_ids))
            .order_by_desc(entity::sale::Column::CreatedAt)
            .all(self.db)
            .await?
        {
            sales
                .entry(sale.user_id)
                .or_default()
                .push(Sale::from_entity(sale));
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithActivity {
                purchases: purchases.remove(&user.id).unwrap_or_default(),
                sales: sales.remove(&user.id).unwrap_or_default(),
                user: User::from_entity(user),
            })
            .collect())
    }

    /// Applies a partial profile update.
    ///
    /// Only fields set in `param` are written; `updated_at` is always refreshed.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Unique violation on email or username, or other database error
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let mut user: entity::user::ActiveModel = self.find_model(id).await?.into();

        if let Some(email) = param.email {
            user.email = ActiveValue::Set(email);
        }
        if let Some(username) = param.username {
            user.username = ActiveValue::Set(username);
        }
        if let Some(avatar_url) = param.avatar_url {
            user.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(role) = param.role {
            user.role = ActiveValue::Set(role.as_str().to_string());
        }
        user.updated_at = ActiveValue::Set(Utc::now());

        let user = user.update(self.db).await?;

        Ok(User::from_entity(user))
    }

    /// Replaces a user's password hash.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `hashed_password` - New bcrypt hash
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, id: i32, hashed_password: String) -> Result<User, DbErr> {
        let mut user: entity::user::ActiveModel = self.find_model(id).await?.into();
        user.hashed_password = ActiveValue::Set(hashed_password);
        user.updated_at = ActiveValue::Set(Utc::now());

        let user = user.update(self.db).await?;

        Ok(User::from_entity(user))
    }

    /// Deletes a user. Carts, purchases, articles and sales go with it by cascade.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user as it was before deletion
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<User, DbErr> {
        let user = self.find_model(id).await?;
        user.clone().delete(self.db).await?;

        Ok(User::from_entity(user))
    }

    async fn find_model(&self, id: i32) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", id)))
    }
}
