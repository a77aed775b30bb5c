mod analysis;
mod auth;
mod config;
mod errors;
mod generation;
mod models;
mod routes;
mod state;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::AuthClient;
use crate::config::{Config, StorageBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::local::LocalStore;
use crate::storage::postgres::PgStore;
use crate::storage::ContentStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed or missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Content Studio API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!("Storage backend: {}", store.backend());

    let auth = match config.auth_settings() {
        Some((url, key)) => {
            let client = AuthClient::new(url, key.to_string()).context("building auth client")?;
            info!("Auth client initialized ({url})");
            Some(client)
        }
        None => {
            warn!("AUTH_URL / AUTH_ANON_KEY not set; auth routes will return 401");
            None
        }
    };

    if config.generation_delay_ms > 0 {
        info!("Simulated generation delay: {}ms", config.generation_delay_ms);
    }

    // Build app state
    let state = AppState::new(store, auth, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the front-end host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(config: &Config) -> Result<Arc<dyn ContentStore>> {
    match config.storage_backend {
        StorageBackend::Local => Ok(Arc::new(LocalStore::new(&config.local_store_path))),
        StorageBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;
            let store = PgStore::connect(url, config.database_max_connections).await?;
            Ok(Arc::new(store))
        }
    }
}
