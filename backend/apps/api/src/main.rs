//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use api::{ApiConfig, OwnerDirectory, build_router};
use auth::{PgAuthRepository, auth_router};
use platform::guard::AccessGuard;
use sqlx::postgres::PgPoolOptions;
use story::{DiskMediaStore, PgStoryRepository, story_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,story=info,platform=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Database connection
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Upload directory
    let media = DiskMediaStore::new(&config.upload_dir);
    media
        .ensure_root()
        .await
        .with_context(|| format!("Failed to create {}", config.upload_dir.display()))?;

    tracing::info!(upload_dir = %config.upload_dir.display(), "Upload directory ready");

    // Session tokens
    let auth_config = config.auth_config();
    let tokens = Arc::new(config.token_service());
    let guard = AccessGuard::new(tokens, auth_config.cookie_name());

    // Build router
    let users = PgAuthRepository::new(pool.clone());
    let api = auth_router(users.clone(), auth_config, guard.clone()).merge(story_router(
        PgStoryRepository::new(pool),
        OwnerDirectory::new(users),
        media,
        config.story_config(),
        guard,
    ));
    let app = build_router(api, &config.http_settings());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
