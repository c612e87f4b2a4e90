use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, Role, UpdateUserParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_with_cart;
mod delete;
mod find_credentials_by_email;
mod get_all_with_activity;
mod update;

fn create_param(email: &str, username: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        username: username.to_string(),
        hashed_password: "hash".to_string(),
        role: Role::Seller,
    }
}
