use super::*;

/// Tests that the available listing excludes sold articles.
///
/// Expected: Ok with only the unsold article
#[tokio::test]
async fn excludes_sold_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, sold) = factory::helpers::create_article_with_dependencies(db).await?;
    let (_, _, available) = factory::helpers::create_article_for_user(db, &user).await?;
    factory::create_sale(db, &sold).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.find(&ArticleFilter::available(None)).await?;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, available.id);

    Ok(())
}

/// Tests the sold listing for one seller.
///
/// Expected: Ok with only that seller's sold article
#[tokio::test]
async fn lists_sold_articles_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, _, sold) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::helpers::create_article_for_user(db, &user).await?;
    factory::create_sale(db, &sold).await?;
    let (_, _, _, other_sold) = factory::helpers::create_article_with_dependencies(db).await?;
    factory::create_sale(db, &other_sold).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo
        .find(&ArticleFilter::available(None).owned_by(user.id).sold())
        .await?;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, sold.id);

    Ok(())
}

/// Tests filtering by game name ignoring case.
///
/// Verifies that a lowercase fragment matches a mixed-case game name and that
/// articles for other games are excluded.
///
/// Expected: Ok with only the matching game's article
#[tokio::test]
async fn filters_by_game_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let valorant = factory::game::create_game_named(db, "Valorant").await?;
    let dota = factory::game::create_game_named(db, "Dota 2").await?;
    let (_, matching) =
        factory::helpers::create_article_for_user_and_game(db, &user, &valorant).await?;
    factory::helpers::create_article_for_user_and_game(db, &user, &dota).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo
        .find(&ArticleFilter::available(Some("VALOR".to_string())))
        .await?;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, matching.id);

    Ok(())
}

/// Tests that listings are ordered newest first.
///
/// Expected: Ok with the most recent article first
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let game = factory::create_game(db).await?;
    let older_purchase = factory::create_purchase(db, user.id, game.id).await?;
    let newer_purchase = factory::create_purchase(db, user.id, game.id).await?;
    let newer = factory::article::ArticleFactory::new(db, user.id, newer_purchase.id)
        .created_at(Utc::now())
        .build()
        .await?;
    let older = factory::article::ArticleFactory::new(db, user.id, older_purchase.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.find(&ArticleFilter::available(None)).await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
