use crate::server::{data::purchase::PurchaseRepository, model::purchase::CreatePurchaseParams};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

/// Tests recording a purchase and reading it back with its game.
///
/// Expected: Ok with the game attached
#[tokio::test]
async fn creates_and_lists_with_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    factory::create_purchase(db, other.id, game.id).await?;

    let repo = PurchaseRepository::new(db);
    let purchase = repo
        .create(CreatePurchaseParams {
            user_id: user.id,
            game_id: game.id,
            purchased_price: 1500,
            origin: "Epic Games".to_string(),
        })
        .await?;

    let purchases = repo.get_by_user_with_game(user.id).await?;

    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].purchase.id, purchase.id);
    assert_eq!(purchases[0].purchase.origin, "Epic Games");
    assert_eq!(purchases[0].game.as_ref().unwrap().id, game.id);

    Ok(())
}

/// Tests recording a purchase for a game that does not exist.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn fails_for_unknown_game() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PurchaseRepository::new(db);
    let err = repo
        .create(CreatePurchaseParams {
            user_id: user.id,
            game_id: 404,
            purchased_price: 1500,
            origin: "Steam".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
