//! Business logic layer.
//!
//! Services sit between controllers and repositories. They take domain parameter models,
//! enforce ownership and existence rules, and translate database constraint failures into
//! client-facing errors with a [`DbErrorMap`](crate::server::error::db::DbErrorMap) per
//! operation. Services never see DTOs.

pub mod article;
pub mod auth;
pub mod game;
pub mod purchase;
pub mod sale;
pub mod token;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
