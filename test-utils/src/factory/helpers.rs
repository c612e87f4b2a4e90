//! Shared helper utilities for factory methods.
//!
//! Provides the unique id counter used by every factory and convenience methods for
//! creating articles together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete article hierarchy.
///
/// This is a convenience method that creates:
/// 1. User (as article owner)
/// 2. Game
/// 3. Purchase of the game by the user
/// 4. Article listing the purchase
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, game, purchase, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::game::Model,
        entity::purchase::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let (game, purchase, article) = create_article_for_user(db, &user).await?;

    Ok((user, game, purchase, article))
}

/// Creates an article owned by an existing user, with a fresh game and purchase.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Owner of the purchase and article
///
/// # Returns
/// - `Ok((game, purchase, article))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<
    (
        entity::game::Model,
        entity::purchase::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let game = crate::factory::game::create_game(db).await?;
    let (purchase, article) = create_article_for_user_and_game(db, user, &game).await?;

    Ok((game, purchase, article))
}

/// Creates a purchase and article for an existing user and game.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Owner of the purchase and article
/// - `game` - Game the purchase is for
///
/// # Returns
/// - `Ok((purchase, article))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_for_user_and_game(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    game: &entity::game::Model,
) -> Result<(entity::purchase::Model, entity::article::Model), DbErr> {
    let purchase = crate::factory::purchase::create_purchase(db, user.id, game.id).await?;
    let article = crate::factory::article::create_article(db, user.id, purchase.id).await?;

    Ok((purchase, article))
}
