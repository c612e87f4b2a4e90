use super::*;

/// Tests updating an article as its owner.
///
/// Expected: Ok(Some) with the new title and unchanged price
#[tokio::test]
async fn updates_owned_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update_owned(
            article.id,
            user.id,
            UpdateArticleParams {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.price, article.price);

    Ok(())
}

/// Tests updating another user's article.
///
/// Expected: Ok(None) and the article unchanged
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
    let result = repo
        .update_owned(
            article.id,
            intruder.id,
            UpdateArticleParams {
                price: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());
    let stored = repo.find_by_id(article.id).await?.unwrap();
    assert_eq!(stored.price, article.price);

    Ok(())
}
