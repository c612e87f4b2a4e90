use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        token::BearerToken,
    },
    model::user::Role,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod token;
