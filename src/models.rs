use sqlx::PgPool;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

// Note: FromRow is needed for runtime query_as (without DATABASE_URL at compile time)

/// One uploaded PDF: its original filename and the extracted plain text.
/// Rows are created exactly once on ingest and never updated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i32,
    pub filename: String,
    pub content: String,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}

// API Request/Response types

#[derive(Debug, serde::Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub book_id: i32,
}

/// Chat response format matching frontend expectations
/// Frontend api.ts expects: { response: string }
#[derive(Debug, serde::Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, serde::Serialize)]
pub struct UploadResponse {
    pub id: i32,
    pub filename: String,
    pub status: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
}
