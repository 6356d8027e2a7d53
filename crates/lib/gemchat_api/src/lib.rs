//! # gemchat_api
//!
//! HTTP API library for Gemchat.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use gemchat_core::gateway::ChatGateway;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, health, page};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the text-generation provider.
    pub gateway: ChatGateway,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/static/script.js", get(page::script_handler))
        .route("/chat", post(chat::chat_handler))
        .route("/health", get(health::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
