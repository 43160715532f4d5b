mod catalog;
mod config;
mod errors;
mod interests;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{default_catalog, load_catalog, Catalog};
use crate::config::Config;
use crate::interests::store::{InterestsStore, JsonFileInterestsStore, MemoryInterestsStore};
use crate::matching::ranker::CosineCareerMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
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

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data: read-only for the lifetime of the process
    let catalog = build_catalog(&config)?;
    info!(
        "Catalog ready: {} categories (vector dimension), {} career paths, {:?} vectors",
        catalog.dimension(),
        catalog.career_paths.len(),
        config.vector_source
    );

    // Saved preferences
    let interests: Arc<dyn InterestsStore> = match &config.interests_store_path {
        Some(path) => Arc::new(
            JsonFileInterestsStore::open(path)
                .await
                .with_context(|| format!("Failed to open interests store {}", path.display()))?,
        ),
        None => {
            info!("Interests store: in-memory");
            Arc::new(MemoryInterestsStore::default())
        }
    };

    let state = AppState {
        catalog: Arc::new(catalog),
        matcher: Arc::new(CosineCareerMatcher::default()),
        interests,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // browser front end is served from another origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Loads the configured catalog (or the embedded one), applies the vector
/// source, and re-validates so a bad catalog never reaches request handling.
fn build_catalog(config: &Config) -> Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => default_catalog(),
    };

    let catalog = catalog.with_vector_source(config.vector_source);
    catalog.validate().context("Catalog failed validation")?;
    Ok(catalog)
}
