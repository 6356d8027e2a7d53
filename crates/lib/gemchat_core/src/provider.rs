//! Text-generation provider seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::generation::GenerationResult;

/// Errors from a failed provider call.
///
/// These cover the call itself. A call that succeeds with a partial or empty
/// result is not an error; see [`crate::extract`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider transport error: {0}")]
    Transport(String),

    #[error("Provider returned status {status}")]
    Status { status: u16, body: String },

    #[error("Provider response decode error: {0}")]
    Decode(String),
}

/// A backend that can generate content for a prompt.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Generate content for `contents` with the given model.
    async fn generate_content(
        &self,
        model: &str,
        contents: &str,
    ) -> Result<GenerationResult, ProviderError>;
}
