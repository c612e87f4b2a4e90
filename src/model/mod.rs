//! Request and response DTOs for the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models convert into them at
//! the controller boundary, which is where sensitive fields (password hashes, purchase
//! prices, purchase origins) are left out.

pub mod api;
pub mod article;
pub mod auth;
pub mod game;
pub mod purchase;
pub mod sale;
pub mod upload;
pub mod user;
