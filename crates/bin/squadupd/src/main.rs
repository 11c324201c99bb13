//! # squadupd
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Seed the game catalog when one is configured
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod catalog;
mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use squadup_adapter_http_axum::state::AppState;
use squadup_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteAdRepository, SqliteGameRepository,
};
use squadup_app::services::ad_service::AdService;
use squadup_app::services::game_service::GameService;

use crate::catalog::Catalog;
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Services
    let game_service = Arc::new(GameService::new(SqliteGameRepository::new(pool.clone())));
    let ad_service = Arc::new(AdService::new(SqliteAdRepository::new(pool)));

    // Catalog
    if let Some(path) = &config.catalog.path {
        let added = Catalog::load(path)?.seed(&game_service).await?;
        tracing::info!(path, added, "game catalog seeded");
    }

    // HTTP
    let state = AppState::from_arcs(game_service, ad_service);
    let app = squadup_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "squadupd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("squadupd stopped");
    Ok(())
}

/// Resolves on the first SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
