use super::*;

/// Tests attaching purchase, game and seller to available articles.
///
/// Verifies that the seller summary lists the seller's available articles only.
///
/// Expected: Ok with purchase, game and seller populated
#[tokio::test]
async fn attaches_purchase_and_seller() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, game, purchase, article) =
        factory::helpers::create_article_with_dependencies(db).await?;
    let (_, _, sold) = factory::helpers::create_article_for_user(db, &user).await?;
    factory::create_sale(db, &sold).await?;

    let repo = ArticleRepository::new(db);
    let articles = repo.find(&ArticleFilter::available(None)).await?;
    let details = repo
        .load_details(articles, ArticleRelations::LISTING)
        .await?;

    assert_eq!(details.len(), 1);
    let details = &details[0];
    assert_eq!(details.article.id, article.id);

    let loaded_purchase = details.purchase.as_ref().unwrap();
    assert_eq!(loaded_purchase.purchase.id, purchase.id);
    assert_eq!(loaded_purchase.game.as_ref().unwrap().id, game.id);

    let seller = details.seller.as_ref().unwrap();
    assert_eq!(seller.id, user.id);
    assert_eq!(seller.username, user.username);
    assert_eq!(seller.articles.len(), 1);
    assert_eq!(seller.articles[0].id, article.id);
    assert!(details.sale.is_none());

    Ok(())
}

/// Tests attaching the sale of a sold article.
///
/// Expected: Ok with the sale populated and the seller omitted
#[tokio::test]
async fn attaches_sale() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let sale = factory::create_sale(db, &article).await?;

    let repo = ArticleRepository::new(db);
    let stored = repo.find_by_id(article.id).await?.unwrap();
    let details = repo
        .load_details(vec![stored], ArticleRelations::PURCHASE_AND_SALE)
        .await?;

    assert_eq!(details[0].sale.as_ref().unwrap().id, sale.id);
    assert!(details[0].seller.is_none());
    assert!(details[0].purchase.is_some());

    Ok(())
}

/// Tests that the public conversion strips the purchase's private fields.
///
/// Expected: purchased_price and origin are None in the public DTO only
#[tokio::test]
async fn public_dto_strips_purchase_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_market_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, article) = factory::helpers::create_article_with_dependencies(db).await?;

    let repo = ArticleRepository::new(db);
    let stored = repo.find_by_id(article.id).await?.unwrap();
    let details = repo
        .load_details(vec![stored], ArticleRelations::ALL)
        .await?
        .remove(0);

    let owner = details.clone().into_dto().purchase.unwrap();
    assert!(owner.purchased_price.is_some());
    assert!(owner.origin.is_some());

    let public = details.into_public_dto().purchase.unwrap();
    assert!(public.purchased_price.is_none());
    assert!(public.origin.is_none());
    assert!(public.game.is_some());

    Ok(())
}
