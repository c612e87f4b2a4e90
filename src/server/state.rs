//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for signing and verifying access tokens
//! - Password hashing cost
//! - Upload directory for stored images

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<TokenService>` and `Arc<PathBuf>` are reference-counted pointers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs tokens on register and login, verifies them in `AuthGuard`.
    pub tokens: Arc<TokenService>,

    /// bcrypt cost factor for new password hashes.
    pub bcrypt_cost: u32,

    /// Directory uploaded images are written to and served from.
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new application state from a database connection and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration providing the JWT secret, token lifetime,
    ///   bcrypt cost and upload directory
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenService::new(
                &config.jwt_secret,
                config.jwt_expiration_days,
            )),
            bcrypt_cost: config.bcrypt_cost,
            upload_dir: Arc::new(config.upload_dir.clone()),
        }
    }
}
