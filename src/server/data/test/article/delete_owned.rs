use super::*;

/// Tests deleting an available article as its owner.
///
/// Expected: Ok(Some) and the row removed
#[tokio::test]
async fn deletes_owned_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let deleted = repo.delete_owned(article.id, user.id).await?;

    assert_eq!(deleted.map(|a| a.id), Some(article.id));
    assert_eq!(entity::prelude::Article::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting another user's article.
///
/// Expected: Ok(None) and the row kept
#[tokio::test]
async fn ignores_article_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let intruder = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let deleted = repo.delete_owned(article.id, intruder.id).await?;

    assert!(deleted.is_none());
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a sold article.
///
/// Expected: Err classified as a foreign key violation, row kept
#[tokio::test]
async fn fails_for_sold_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::create_sale(db, &article).await?;

    let repo = ArticleRepository::new(db);
    let err = repo.delete_owned(article.id, user.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Article::find().count(db).await?, 1);

    Ok(())
}
