//! User service for business logic.
//!
//! This module provides the `UserService` for account management: admin listings and
//! updates, self-service profile and password changes, and deletion. It works with domain
//! models rather than DTOs and never returns password hashes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{db::DbErrorMap, AppError},
    model::user::{UpdateUserParam, User, UserWithActivity},
    util::password::hash_password,
};

const USER_WRITE_ERRORS: DbErrorMap<'static> = DbErrorMap::new()
    .unique(&[
        ("email", "Email already exists"),
        ("username", "Username already exists"),
    ])
    .not_found("User not found");

/// Service providing business logic for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for user queries, updates and deletion.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with their purchases and sales.
    ///
    /// # Returns
    /// - `Ok(Vec<UserWithActivity>)` - All users, never empty
    /// - `Err(AppError::NotFound)` - There are no users
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all_users(&self) -> Result<Vec<UserWithActivity>, AppError> {
        let users = UserRepository::new(self.db).get_all_with_activity().await?;
        if users.is_empty() {
            return Err(AppError::NotFound("Users not found".to_string()));
        }

        Ok(users)
    }

    /// Retrieves a user by ID.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a partial update to a user.
    ///
    /// Used for both self-service updates and admin updates; the caller decides whether
    /// the role may be part of `param`.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::Conflict)` - Email or username already taken
    /// - `Err(AppError::DbErr)` - Other database error
    pub async fn update_user(&self, id: i32, param: UpdateUserParam) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(|e| USER_WRITE_ERRORS.translate(e))
    }

    /// Replaces a user's password.
    ///
    /// # Arguments
    /// - `id` - User ID
    /// - `password` - New plain-text password
    /// - `bcrypt_cost` - Cost factor for the new hash
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn update_password(
        &self,
        id: i32,
        password: String,
        bcrypt_cost: u32,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(password, bcrypt_cost).await?;

        UserRepository::new(self.db)
            .update_password(id, hashed_password)
            .await
            .map_err(|e| USER_WRITE_ERRORS.translate(e))
    }

    /// Deletes a user and everything they own.
    ///
    /// # Arguments
    /// - `id` - User ID
    ///
    /// # Returns
    /// - `Ok(User)` - The deleted user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_user(&self, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| USER_WRITE_ERRORS.translate(e))?;

        tracing::info!("Deleted user {} ({})", user.id, user.username);

        Ok(user)
    }
}
