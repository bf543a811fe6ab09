//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::documents::Registry;
use crate::extract::{BaseGenerativeModel, ExtractionService};
use crate::server::routes::{health_handler, metadata_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: ExtractionService,
}

/// Build the Axum application router.
///
/// The registry is read-only after this point; the backend is the single
/// outbound collaborator. Both are shared across all in-flight requests.
pub fn build_app(registry: Arc<Registry>, backend: Arc<dyn BaseGenerativeModel>) -> Router {
    let state = AppState {
        service: ExtractionService::new(backend, registry),
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/metadata", get(metadata_handler))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}
