use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the provided fields change.
///
/// Expected: Ok with the new username and the old email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo
        .update(
            existing.id,
            UpdateUserParam {
                username: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(user.username, "renamed");
    assert_eq!(user.email, existing.email);

    Ok(())
}

/// Tests changing a user's role.
///
/// Expected: Ok with the new role persisted
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update(
        existing.id,
        UpdateUserParam {
            role: Some(Role::Admin),
            ..Default::default()
        },
    )
    .await?;

    let stored = repo.find_by_id(existing.id).await?.unwrap();
    assert_eq!(stored.role, Role::Admin);

    Ok(())
}

/// Tests updating to an email another user already has.
///
/// Expected: Err mentioning the email column
#[tokio::test]
async fn fails_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let taken = factory::create_user(db).await?;
    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            existing.id,
            UpdateUserParam {
                email: Some(taken.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.unwrap_err().to_string().contains("email"));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(999, UpdateUserParam::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests replacing the password hash.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(existing.id, "new-hash".to_string())
        .await?;

    let stored = entity::prelude::User::find_by_id(existing.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.hashed_password, "new-hash");

    Ok(())
}
