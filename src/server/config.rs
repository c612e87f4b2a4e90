//! Environment-based application configuration.

use std::{net::SocketAddr, path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
const DEFAULT_UPLOAD_DIR: &str = "./files";
const DEFAULT_JWT_EXPIRATION_DAYS: i64 = 7;
const DEFAULT_BCRYPT_COST: u32 = 10;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,

    pub jwt_secret: String,
    pub jwt_expiration_days: i64,
    pub bcrypt_cost: u32,

    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` are required; every other setting falls back to a
    /// default when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and parseable
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_addr: parsed_or("SERVER_ADDR", SocketAddr::from(DEFAULT_SERVER_ADDR))?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_days: parsed_or("JWT_EXPIRATION_DAYS", DEFAULT_JWT_EXPIRATION_DAYS)?,
            bcrypt_cost: parsed_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: parsed_or("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
