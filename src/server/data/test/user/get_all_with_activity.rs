use super::*;

/// Tests listing users with their purchases and sales.
///
/// Verifies that purchases and sales are grouped under the user who made them and
/// that users without activity get empty lists.
///
/// Expected: Ok with activity attached to the right users
#[tokio::test]
async fn groups_activity_by_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (seller, _game, purchase, article) =
        factory::helpers::create_article_with_dependencies(db).await?;
    factory::create_sale(db, &article).await?;
    let idle = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all_with_activity().await?;

    assert_eq!(users.len(), 2);
    let seller_entry = users.iter().find(|u| u.user.id == seller.id).unwrap();
    assert_eq!(seller_entry.purchases.len(), 1);
    assert_eq!(seller_entry.purchases[0].id, purchase.id);
    assert_eq!(seller_entry.sales.len(), 1);
    assert_eq!(seller_entry.sales[0].article_id, article.id);

    let idle_entry = users.iter().find(|u| u.user.id == idle.id).unwrap();
    assert!(idle_entry.purchases.is_empty());
    assert!(idle_entry.sales.is_empty());

    Ok(())
}

/// Tests listing users from an empty table.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all_with_activity().await?;

    assert!(users.is_empty());

    Ok(())
}
