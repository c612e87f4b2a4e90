use super::*;

/// Tests looking up login credentials by email.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("bob@example.com")
        .hashed_password("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("bob@example.com").await?;

    let credentials = credentials.expect("credentials should exist");
    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.hashed_password, "stored-hash");

    Ok(())
}

/// Tests looking up an email with no account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(credentials.is_none());

    Ok(())
}
