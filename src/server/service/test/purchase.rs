use super::*;
use crate::server::{model::purchase::CreatePurchaseParams, service::purchase::PurchaseService};
use test_utils::factory;

/// Tests recording a purchase for an unknown game.
///
/// Expected: Err(NotFound("Game not found"))
#[tokio::test]
async fn rejects_unknown_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = PurchaseService::new(db)
        .create_purchase(CreatePurchaseParams {
            user_id: user.id,
            game_id: 99,
            purchased_price: 500,
            origin: "Steam".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Game not found"));

    Ok(())
}

/// Tests listing the caller's purchases.
///
/// Expected: Ok with only the caller's purchases, newest first
#[tokio::test]
async fn lists_only_my_purchases() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let first = factory::create_purchase(db, user.id, game.id).await?;
    let second = factory::create_purchase(db, user.id, game.id).await?;
    factory::create_purchase(db, other.id, game.id).await?;

    let purchases = PurchaseService::new(db).get_my_purchases(user.id).await?;

    let ids: Vec<i32> = purchases.iter().map(|p| p.purchase.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}
