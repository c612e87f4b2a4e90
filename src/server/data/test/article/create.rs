use super::*;

fn params(user_id: i32, purchase_id: i32) -> CreateArticleParams {
    CreateArticleParams {
        user_id,
        purchase_id,
        title: "Diamond account".to_string(),
        description: None,
        price: 4999,
    }
}

/// Tests listing a purchase as an article.
///
/// Expected: Ok with the article stored
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let purchase = factory::create_purchase(db, user.id, game.id).await?;

    let repo = ArticleRepository::new(db);
    let article = repo.create(params(user.id, purchase.id)).await?;

    assert_eq!(article.purchase_id, purchase.id);
    assert_eq!(article.price, 4999);
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);

    Ok(())
}

/// Tests listing the same purchase twice.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn fails_on_second_article_for_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, purchase, _) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let err = repo.create(params(user.id, purchase.id)).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests listing a purchase that does not exist.
///
/// Expected: Err classified as a foreign key violation
#[tokio::test]
async fn fails_for_unknown_purchase() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let err = repo.create(params(user.id, 999)).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
