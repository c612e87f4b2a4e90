//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! The password hash never leaves the repository layer inside a domain model.

pub mod article;
pub mod auth;
pub mod game;
pub mod purchase;
pub mod sale;
pub mod user;
