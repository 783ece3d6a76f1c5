//! Static File Serving
//!
//! Serves the built front-end bundle and the SPA fallback. API paths that
//! reach the fallback were not matched by any route and get a JSON 404.

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Get the static files directory path
fn get_static_dir() -> PathBuf {
    let paths = [PathBuf::from("static"), PathBuf::from("client/dist")];

    for path in paths {
        if path.is_dir() {
            info!(path = %path.display(), "Found static files directory");
            return path;
        }
    }

    // Default to first path (requests will fall through to the JSON fallback)
    warn!("Static files directory not found, frontend may not be built");
    PathBuf::from("static")
}

/// Create router for serving static files
pub fn router() -> Router {
    let static_dir = get_static_dir();

    Router::new()
        .nest_service("/assets", ServeDir::new(static_dir.join("assets")))
        .fallback(spa_fallback)
}

/// Serve the front-end entry document for client-side routing.
async fn spa_fallback(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    // API routes that reached the fallback don't exist
    if path.starts_with("api/") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "API route not found" })),
        )
            .into_response();
    }

    let candidates = [
        PathBuf::from("static/index.html"),
        PathBuf::from("client/dist/index.html"),
    ];

    for candidate in candidates {
        if let Ok(content) = tokio::fs::read_to_string(&candidate).await {
            return Html(content).into_response();
        }
    }

    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Frontend not built" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unknown_api_path_gets_json_404() {
        let response = spa_fallback(Uri::from_static("/api/does-not-exist")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "API route not found" })
        );
    }

    #[tokio::test]
    async fn missing_bundle_reports_frontend_not_built() {
        // Tests run from the crate root, where no bundle exists.
        let response = spa_fallback(Uri::from_static("/reader/42")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Frontend not built" })
        );
    }
}
