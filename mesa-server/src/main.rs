//! mesa-server: restaurant table management API
//!
//! Long-running HTTP service that:
//! - Registers users and issues bearer tokens (argon2 + JWT)
//! - Manages the mesa resource (CRUD + aggregate stats)
//! - Gates every mesa route behind token verification

mod api;
mod auth;
mod config;
mod db;
mod state;
mod util;
mod validation;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mesa_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting mesa-server (env: {})", config.environment);

    // Initialize application state (pool + migrations); a broken database
    // configuration fails startup instead of serving a dead API
    let state = AppState::new(&config).await?;

    let app = api::create_router(state.clone());

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("mesa-server HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Close the pool once in-flight requests have drained
    state.pool.close().await;
    tracing::info!("mesa-server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
