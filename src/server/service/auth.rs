//! Registration and login.
//!
//! This module provides the `AuthService`, which hashes passwords, creates accounts
//! together with their active cart, checks credentials and issues access tokens.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, db::DbErrorMap, AppError},
    model::{
        auth::{AccessToken, LoginParams, RegisterParams},
        user::{CreateUserParam, Role},
    },
    service::token::TokenService,
    util::password::{hash_password, verify_password},
};

const REGISTER_ERRORS: DbErrorMap<'static> = DbErrorMap::new().unique(&[
    ("email", "Email already exists"),
    ("username", "Username already exists"),
]);

/// Service providing account registration and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign access tokens
    /// - `bcrypt_cost` - Cost factor for new password hashes
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, bcrypt_cost: u32) -> Self {
        Self {
            db,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new account and signs a token for it.
    ///
    /// New accounts get the `seller` role. The user and their active cart are created in
    /// one transaction.
    ///
    /// # Arguments
    /// - `params` - Email, username and plain-text password
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Token for the new user
    /// - `Err(AppError::Conflict)` - Email or username already taken
    /// - `Err(AppError::AuthErr(TokenCreation))` - Signing failed
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterParams) -> Result<AccessToken, AppError> {
        let hashed_password = hash_password(params.password, self.bcrypt_cost).await?;

        let user = UserRepository::new(self.db)
            .create_with_cart(CreateUserParam {
                email: params.email,
                username: params.username,
                hashed_password,
                role: Role::Seller,
            })
            .await
            .map_err(|e| REGISTER_ERRORS.translate(e))?;

        tracing::info!("Registered user {} ({})", user.id, user.username);

        Ok(self.tokens.sign(user.id, &user.email)?)
    }

    /// Checks credentials and signs a token.
    ///
    /// # Arguments
    /// - `params` - Email and plain-text password
    ///
    /// # Returns
    /// - `Ok(AccessToken)` - Token for the user
    /// - `Err(AppError::AuthErr(CredentialsIncorrect))` - No account with that email
    /// - `Err(AppError::AuthErr(InvalidPassword))` - Password does not match
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn login(&self, params: LoginParams) -> Result<AccessToken, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(&params.email)
            .await?
            .ok_or(AuthError::CredentialsIncorrect)?;

        if !verify_password(params.password, credentials.hashed_password).await? {
            return Err(AuthError::InvalidPassword.into());
        }

        Ok(self
            .tokens
            .sign(credentials.user.id, &credentials.user.email)?)
    }
}
