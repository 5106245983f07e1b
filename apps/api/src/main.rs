mod catalog;
mod config;
mod diagnosis;
mod errors;
mod graph;
mod models;
mod recommendation;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::ValueCatalog;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting valuemap v{}", env!("CARGO_PKG_VERSION"));

    // Load the value card catalog (built-in unless overridden)
    let catalog = match &config.value_catalog_path {
        Some(path) => ValueCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load value catalog from {}", path.display()))?,
        None => ValueCatalog::builtin().context("Built-in value catalog is invalid")?,
    };
    info!(
        "Value catalog loaded: {} cards, {} questions",
        catalog.cards().len(),
        catalog.questions().len()
    );

    let state = AppState::new(catalog);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
