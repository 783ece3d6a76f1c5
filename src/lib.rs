// bookchat - chat-with-your-PDF backend

pub mod config;
pub mod db;
pub mod models;
pub mod types;
pub mod extract;
pub mod prompt;
pub mod llm;
pub mod routes;
pub mod middleware;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
// Note: Import specific items from types module instead of glob to avoid name conflicts
// e.g., use bookchat::types::{LLMRequest, LLMResponse, AppResult};

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
