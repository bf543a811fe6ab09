// Main entry point for the extraction API server

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use server_core::{documents::Registry, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Document Metadata Extraction API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Build the document-type registry; malformed descriptors fail here,
    // not at request time.
    let registry = Registry::builtin().context("Failed to build document-type registry")?;
    tracing::info!(document_types = registry.len(), "Registry loaded");

    let client = GeminiClient::new(config.gemini_api_key.clone());

    // Build application
    let app = build_app(Arc::new(registry), Arc::new(client));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
