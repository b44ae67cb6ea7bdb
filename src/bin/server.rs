//! Standalone screening API server (without Dioxus frontend)
//! Use this for API-only testing or with the `screen` terminal client.
//!
//! Run with: PORT=3003 cargo run --bin server --features server

use anyhow::Context;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use negative_news_screening::config::ServiceConfig;
use negative_news_screening::handlers::{api_router, ScreeningHandlerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Negative News Screening API Server (standalone)...");

    let config = ServiceConfig::from_env().context("Invalid server configuration")?;
    let state = ScreeningHandlerState::new(&config);
    let registry = state.registry.clone();

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down, stopping {} screening job(s)", registry.len());
            registry.cancel_all();
        })
        .await
        .context("Server error")?;

    Ok(())
}
