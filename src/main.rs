mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config,
    error::AppError,
    router::router,
    startup::{connect_to_database, cors_layer, init_tracing},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;
    let db = connect_to_database(&config).await?;

    let app = router(config.max_upload_bytes)
        .with_state(AppState::new(db, &config))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    tracing::info!("Listening on {}", config.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
