//! SeaORM entity definitions for the game market schema.

pub mod prelude;

pub mod article;
pub mod cart;
pub mod game;
pub mod purchase;
pub mod sale;
pub mod user;
