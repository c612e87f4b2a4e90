use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::token::BearerToken,
    model::user::{Role, User},
    service::token::TokenService,
};

/// Role an endpoint requires. Admins satisfy every permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Seller,
    Admin,
}

impl Permission {
    fn role(&self) -> Role {
        match self {
            Self::Seller => Role::Seller,
            Self::Admin => Role::Admin,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    token: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, token: &'a BearerToken) -> Self {
        Self { db, tokens, token }
    }

    /// Authenticates the request and checks the given permissions.
    ///
    /// Pass an empty slice to only require a valid token for an existing user.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the user must all hold
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Token malformed, wrongly signed or expired
    /// - `Err(AuthError::UserNotFound)` - Token names a user that no longer exists
    /// - `Err(AuthError::AccessDenied)` - User lacks one of the permissions
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.token.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        for permission in permissions {
            let required = permission.role();
            if !user.role.satisfies(required) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("requires role {} but has {}", required, user.role),
                )
                .into());
            }
        }

        Ok(user)
    }
}
