//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/health` - Health check
//! - `/api/upload` - PDF upload and ingest
//! - `/api/chat` - Ask questions about an uploaded book
//! - `/` - Static file serving (frontend) with SPA fallback

pub mod chat;
pub mod health;
pub mod static_files;
pub mod upload;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use crate::middleware::cors_layer;
use crate::models::AppState;
use tracing::info;

/// Uploads are buffered in memory; cap the request body so oversized PDFs
/// fail cleanly instead of exhausting the process.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Create the main application router
///
/// API routes are prefixed with `/api/` and take precedence over static
/// files; everything else falls through to the SPA entry point.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server);

    // API routes (with state)
    let api_router = Router::new()
        .merge(upload::router(state.clone()))
        .merge(chat::router(state))
        .merge(health::router());

    Router::new()
        .merge(api_router)
        .merge(static_files::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}
