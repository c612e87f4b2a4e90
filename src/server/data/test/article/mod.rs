use crate::server::{
    data::article::{ArticleRelations, ArticleRepository},
    model::article::{ArticleFilter, CreateArticleParams, UpdateArticleParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_owned;
mod find;
mod load_details;
mod update_owned;
