use super::*;
use crate::server::{model::game::CreateGameParams, service::game::GameService};

/// Tests creating a game with a name already in the catalogue.
///
/// Expected: Err(Conflict("Game already exists"))
#[tokio::test]
async fn rejects_duplicate_game() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Game)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GameService::new(db);
    let params = CreateGameParams {
        name: "League of Legends".to_string(),
        image_url: None,
    };
    service.create_game(params.clone()).await?;

    let result = service.create_game(params).await;

    assert!(matches!(result, Err(AppError::Conflict(msg)) if msg == "Game already exists"));

    Ok(())
}
