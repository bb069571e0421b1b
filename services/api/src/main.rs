use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod repositories;
mod routes;
mod state;
mod update;
mod validation;

use common::database::{DatabaseConfig, init_pool};

use crate::{
    repositories::{UserRepository, game::GameRepository},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting gamestore API service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if common::database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Initialize repositories
    let game_repository = GameRepository::new(pool.clone());
    let user_repository = UserRepository::new(pool);

    let app_state = AppState {
        game_repository,
        user_repository,
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    info!("API service listening on 0.0.0.0:{port}");

    axum::serve(listener, app).await?;

    Ok(())
}
