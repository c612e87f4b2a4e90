use super::*;

/// Tests deleting a user with listed and sold articles.
///
/// Verifies that the user's cart, purchases, articles and sales are removed by cascade.
///
/// Expected: Ok with every dependent table empty
#[tokio::test]
async fn cascades_to_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _game, _purchase, article) =
        factory::helpers::create_article_with_dependencies(db).await?;
    factory::create_cart(db, user.id).await?;
    factory::create_sale(db, &article).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert_eq!(deleted.id, user.id);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Cart::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Purchase::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Sale::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.delete(42).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
