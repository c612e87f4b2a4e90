use crate::server::{data::game::GameRepository, model::game::CreateGameParams};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

/// Tests listing games sorted by name.
///
/// Expected: Ok with games in alphabetical order
#[tokio::test]
async fn lists_games_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game_named(db, "Zelda").await?;
    factory::game::create_game_named(db, "Apex Legends").await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all(None).await?;

    let names: Vec<&str> = games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Apex Legends", "Zelda"]);

    Ok(())
}

/// Tests filtering games by a name fragment in another case.
///
/// Expected: Ok with only the matching game
#[tokio::test]
async fn filters_by_name_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game_named(db, "Counter-Strike 2").await?;
    factory::game::create_game_named(db, "Minecraft").await?;

    let repo = GameRepository::new(db);
    let games = repo.get_all(Some("strike")).await?;

    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Counter-Strike 2");

    Ok(())
}

/// Tests creating a game with a taken name.
///
/// Expected: Err classified as a unique constraint violation
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GameRepository::new(db);
    repo.create(CreateGameParams {
        name: "Rust".to_string(),
        image_url: None,
    })
    .await?;

    let err = repo
        .create(CreateGameParams {
            name: "Rust".to_string(),
            image_url: Some("files/rust.png".to_string()),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that `%` and `_` in the filter match only themselves.
///
/// Expected: Ok with no game for bare wildcards, the literal match for `100%`
#[tokio::test]
async fn filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game_named(db, "Zelda").await?;
    factory::game::create_game_named(db, "100% Orange Juice").await?;

    let repo = GameRepository::new(db);

    let percent = repo.get_all(Some("%")).await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].name, "100% Orange Juice");

    assert!(repo.get_all(Some("_")).await?.is_empty());
    assert!(repo.get_all(Some("z_lda")).await?.is_empty());
    assert!(repo.get_all(Some("\\")).await?.is_empty());

    Ok(())
}

/// Tests that only ASCII letters are folded when filtering.
///
/// Expected: Ok matching across ASCII case, exact case required for other letters
#[tokio::test]
async fn filter_folds_ascii_case_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::game::create_game_named(db, "Pokémon").await?;

    let repo = GameRepository::new(db);

    assert_eq!(repo.get_all(Some("POKÉ")).await?.len(), 0);
    assert_eq!(repo.get_all(Some("POKé")).await?.len(), 1);

    Ok(())
}
