use super::*;

/// Tests creating a user together with their cart.
///
/// Verifies that the user row and a cart row are both inserted and that the user's
/// active cart points at the new cart.
///
/// Expected: Ok with active_cart_id set to the created cart
#[tokio::test]
async fn creates_user_with_active_cart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create_with_cart(create_param("alice@example.com", "alice"))
        .await?;

    let carts = entity::prelude::Cart::find().all(db).await?;
    assert_eq!(carts.len(), 1);
    assert_eq!(carts[0].user_id, user.id);
    assert_eq!(user.active_cart_id, Some(carts[0].id));
    assert_eq!(user.role, Role::Seller);

    Ok(())
}

/// Tests that a duplicate email leaves no partial rows behind.
///
/// Verifies that when the user insert fails on the unique email constraint, the
/// transaction is rolled back and no extra user or cart exists.
///
/// Expected: Err with one user and one cart remaining
#[tokio::test]
async fn rolls_back_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create_with_cart(create_param("alice@example.com", "alice"))
        .await?;

    let result = repo
        .create_with_cart(create_param("alice@example.com", "alice2"))
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Cart::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a duplicate username is rejected.
///
/// Expected: Err mentioning the username column
#[tokio::test]
async fn fails_on_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create_with_cart(create_param("alice@example.com", "alice"))
        .await?;

    let result = repo
        .create_with_cart(create_param("other@example.com", "alice"))
        .await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("username"));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
