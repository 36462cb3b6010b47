mod analysis;
mod config;
mod errors;
mod models;
mod reddit_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::scorer::PersonalityAnalyzer;
use crate::config::Config;
use crate::reddit_client::RedditClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TraitLens v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Reddit client
    let reddit = RedditClient::new(config.reddit.clone(), config.fetch_limit)?;
    info!(
        "Reddit client initialized (fetch limit: {} per listing)",
        config.fetch_limit
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        fetcher: Arc::new(reddit),
        analyzer: PersonalityAnalyzer::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
