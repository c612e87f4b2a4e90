use crate::server::error::AppError;
use test_utils::builder::TestBuilder;

mod game;
mod purchase;
mod upload;

/// Lowest cost bcrypt accepts, keeps tests fast.
const TEST_BCRYPT_COST: u32 = 4;
