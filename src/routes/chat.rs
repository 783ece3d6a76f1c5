use axum::{
    Router,
    routing::post,
    Json,
    extract::State,
};
use crate::db::BookStore;
use crate::llm::provider::{LLMProviderConfig, LLM};
use crate::models::{AppState, ChatRequest, ChatResponse};
use crate::prompt;
use crate::types::{AppError, AppResult, LLMMessage, LLMRequest};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(post_chat))
        .with_state(state)
}

/// Answer a question about an uploaded book by stuffing its (bounded) text
/// into a Gemini prompt and returning the model's answer verbatim.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    info!(book_id = request.book_id, "Received chat request");

    let book = BookStore::get_by_id(&state.pool, request.book_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;

    // Key is resolved once at startup; an unset key degrades chat without
    // ever contacting the upstream service.
    let api_key = state
        .config
        .llm
        .api_key()
        .ok_or_else(|| AppError::Config("Server API Key not configured".to_string()))?;

    let llm = LLM::new(LLMProviderConfig {
        name: "google".to_string(),
        api_key: api_key.to_string(),
    })?;

    let llm_request = LLMRequest {
        model: state.config.llm.model.clone(),
        messages: vec![LLMMessage::user(prompt::build_prompt(
            &book.content,
            &request.message,
        ))],
        max_tokens: Some(state.config.llm.max_output_tokens),
        temperature: Some(state.config.llm.temperature),
        system_instruction: Some(prompt::SYSTEM_INSTRUCTION.to_string()),
    };

    let response = llm.create_chat_completion(&llm_request).await?;

    info!(
        book_id = request.book_id,
        tokens = response.usage.total_tokens,
        "Chat response generated"
    );

    Ok(Json(ChatResponse {
        response: response.content,
    }))
}
