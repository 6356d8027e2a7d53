//! Chat request handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use gemchat_core::gateway::Mode;
use tracing::info;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::{ChatQuery, ChatRequest, ChatResponse};

/// `POST /chat` — relay one message to the provider and return its reply.
///
/// `?mode=plain|optimize` overrides the configured default mode.
pub async fn chat_handler(
    State(state): State<AppState>,
    Query(query): Query<ChatQuery>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(request) = body?;

    let mode = match query.mode.as_deref() {
        Some(raw) => raw
            .parse::<Mode>()
            .map_err(|e| AppError::Validation(e.to_string()))?,
        None => state.config.default_mode,
    };

    info!(%mode, message_len = request.message.len(), "chat request");

    let response = state.gateway.converse(&request.message, mode).await?;
    Ok(Json(ChatResponse { response }))
}
