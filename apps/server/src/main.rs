//! # Caixa PDV server
//!
//! Startup sequence: tracing, config, database (with migrations), seed,
//! HTTP listener with graceful shutdown.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PDV frontend ───► HTTP (3000) ───► handlers ───► caixa-db ───► SQLite │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use caixa_db::{Database, DbConfig};
use caixa_server::{build_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting Caixa PDV server...");

    // Load configuration
    let config = ServerConfig::load()?;
    info!(
        addr = %config.bind_addr(),
        database = %config.database_path,
        "Configuration loaded"
    );

    // Connect to database (runs migrations)
    let db = Database::new(DbConfig::new(&config.database_path)).await?;

    // Seed the admin operator and payment methods
    if config.seed_on_start {
        caixa_db::seed::seed_defaults(&db).await?;
    }

    // Build the router with shared state
    let app = build_router(AppState { db: db.clone() });

    // Serve until shutdown signal
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
