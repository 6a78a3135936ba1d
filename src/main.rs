mod config;
mod dto;
mod handlers;
mod interceptors;
mod middleware;
mod models;
mod repositories;
mod routes;
mod seeders;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use anyhow::Context;
use crate::config::{run_migrations, AppConfig, AppState, DatabaseConfig};
use crate::middleware::setup_logging;
use crate::routes::create_router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    let _log_guard = setup_logging();

    tracing::info!("Starting application...");

    // Load configurations
    let app_config = AppConfig::from_env().context("loading application config")?;
    let db_config = DatabaseConfig::from_env().context("loading database config")?;

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);

    // Create database connection pool
    let db_pool = db_config
        .create_pool()
        .await
        .context("connecting to the database")?;
    tracing::info!("Database connection pool created");

    if db_config.auto_migrate {
        run_migrations(&db_pool).await.context("running migrations")?;
        tracing::info!("Database migrations applied");
    }

    // Create AppState
    let app_state = AppState::new(db_pool, app_config.clone());

    if app_config.seed_demo_data {
        if app_config.is_production() {
            tracing::warn!("SEED_DEMO_DATA is set in production; skipping demo data");
        } else {
            seeders::seed_demo_data(&app_state, chrono::Utc::now())
                .await
                .context("seeding demo data")?;
        }
    }

    // Create router
    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Create server address
    let addr = app_config.server_address();
    tracing::info!("Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
