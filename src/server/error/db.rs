//! Translation of database failures into HTTP error categories.
//!
//! SeaORM surfaces constraint failures as `DbErr` values whose `sql_err()` classifies them
//! independently of the backend. Services describe, per operation, which message each
//! violation should produce with a [`DbErrorMap`] and hand failing `DbErr`s to
//! [`DbErrorMap::translate`]. Anything the map does not describe stays an
//! `AppError::DbErr` and becomes a 500.

use sea_orm::{DbErr, SqlErr};

use crate::server::error::AppError;

/// Backend-independent classification of a database failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbViolation {
    /// A unique constraint rejected the write. Carries the driver's message, which names
    /// the offending column or constraint.
    Unique(String),
    /// A foreign key constraint rejected the write or delete.
    ForeignKey(String),
    /// The targeted row does not exist.
    NotFound,
}

/// Classifies a database error, or returns `None` for failures with no HTTP mapping
/// (connection loss, syntax errors, ...).
pub fn classify(err: &DbErr) -> Option<DbViolation> {
    if matches!(err, DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) {
        return Some(DbViolation::NotFound);
    }

    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => Some(DbViolation::Unique(detail)),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            Some(DbViolation::ForeignKey(detail))
        }
        _ => None,
    }
}

/// HTTP error category a violation is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Conflict,
    Forbidden,
}

impl ErrorCategory {
    fn into_error(self, message: &str) -> AppError {
        match self {
            Self::NotFound => AppError::NotFound(message.to_string()),
            Self::Conflict => AppError::Conflict(message.to_string()),
            Self::Forbidden => AppError::Forbidden(message.to_string()),
        }
    }
}

/// Lookup table from database violations to client-facing errors for one operation.
///
/// # Example
///
/// ```rust,ignore
/// const USER_WRITE_ERRORS: DbErrorMap<'static> = DbErrorMap::new()
///     .unique(&[("email", "Email already exists"), ("username", "Username already exists")])
///     .not_found("User not found");
///
/// repo.update(id, params).await.map_err(|e| USER_WRITE_ERRORS.translate(e))?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DbErrorMap<'a> {
    /// `(column, message)` pairs checked in order against the unique violation detail.
    unique: &'a [(&'a str, &'a str)],
    /// Message for unique violations no column entry matched.
    unique_fallback: Option<&'a str>,
    foreign_key: Option<(ErrorCategory, &'a str)>,
    not_found: Option<&'a str>,
}

impl<'a> DbErrorMap<'a> {
    /// Creates an empty map; every violation passes through untranslated.
    pub const fn new() -> Self {
        Self {
            unique: &[],
            unique_fallback: None,
            foreign_key: None,
            not_found: None,
        }
    }

    /// Maps unique violations on specific columns to 409 Conflict messages.
    pub const fn unique(mut self, targets: &'a [(&'a str, &'a str)]) -> Self {
        self.unique = targets;
        self
    }

    /// Maps any unique violation not matched by a column entry to a 409 Conflict message.
    pub const fn unique_fallback(mut self, message: &'a str) -> Self {
        self.unique_fallback = Some(message);
        self
    }

    /// Maps foreign key violations to the given category and message.
    pub const fn foreign_key(mut self, category: ErrorCategory, message: &'a str) -> Self {
        self.foreign_key = Some((category, message));
        self
    }

    /// Maps missing-record errors to a 404 Not Found message.
    pub const fn not_found(mut self, message: &'a str) -> Self {
        self.not_found = Some(message);
        self
    }

    /// Translates a database error according to this map.
    ///
    /// # Arguments
    /// - `err` - The failed operation's error
    ///
    /// # Returns
    /// - `AppError::Conflict` / `NotFound` / `Forbidden` - The violation has an entry
    /// - `AppError::DbErr` - Unclassified failure or violation without an entry
    pub fn translate(&self, err: DbErr) -> AppError {
        let mapped = match classify(&err) {
            Some(DbViolation::Unique(detail)) => self
                .unique
                .iter()
                .find(|(column, _)| detail.contains(column))
                .map(|(_, message)| *message)
                .or(self.unique_fallback)
                .map(|message| ErrorCategory::Conflict.into_error(message)),
            Some(DbViolation::ForeignKey(_)) => self
                .foreign_key
                .map(|(category, message)| category.into_error(message)),
            Some(DbViolation::NotFound) => self
                .not_found
                .map(|message| ErrorCategory::NotFound.into_error(message)),
            None => None,
        };

        mapped.unwrap_or(AppError::DbErr(err))
    }
}

impl Default for DbErrorMap<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ERRORS: DbErrorMap<'static> = DbErrorMap::new()
        .unique(&[
            ("email", "Email already exists"),
            ("username", "Username already exists"),
        ])
        .not_found("User not found");

    #[test]
    fn translates_record_not_found() {
        let err = USER_ERRORS.translate(DbErr::RecordNotFound("user".to_string()));

        assert!(matches!(err, AppError::NotFound(msg) if msg == "User not found"));
    }

    #[test]
    fn passes_through_unmapped_errors() {
        let err = USER_ERRORS.translate(DbErr::Custom("connection reset".to_string()));

        assert!(matches!(err, AppError::DbErr(DbErr::Custom(_))));
    }

    #[test]
    fn passes_through_not_found_without_entry() {
        let err = DbErrorMap::new().translate(DbErr::RecordNotUpdated);

        assert!(matches!(err, AppError::DbErr(DbErr::RecordNotUpdated)));
    }

    #[test]
    fn classifies_record_not_updated_as_not_found() {
        assert_eq!(classify(&DbErr::RecordNotUpdated), Some(DbViolation::NotFound));
    }
}
