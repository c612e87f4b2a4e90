//! Request authentication.
//!
//! `BearerToken` pulls the raw token out of the `Authorization` header without rejecting
//! the request, and `AuthGuard` turns it into a loaded user with the required role, so
//! each handler decides for itself whether it needs authentication.

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
