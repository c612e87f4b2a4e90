//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Constraint failures are returned as `DbErr` untouched; services decide what they mean.

pub mod article;
pub mod game;
pub mod purchase;
pub mod sale;
pub mod user;

#[cfg(test)]
mod test;
