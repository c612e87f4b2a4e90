//! HTTP request handlers.
//!
//! Controllers authenticate the request through `AuthGuard`, validate and convert DTOs
//! into domain parameters, call a service and convert the result back into DTOs. Every
//! handler carries a `utoipa::path` annotation collected by [`ApiDoc`](crate::server::docs::ApiDoc).

pub mod article;
pub mod auth;
pub mod game;
pub mod param;
pub mod purchase;
pub mod sale;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
