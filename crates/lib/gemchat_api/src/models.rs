//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST /chat` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /chat` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Optional query parameters for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatQuery {
    /// `plain` or `optimize`; overrides the configured default.
    pub mode: Option<String>,
}

/// `GET /health` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

/// Error envelope for every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
