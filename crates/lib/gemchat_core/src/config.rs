//! Gemini provider configuration.
//!
//! Resolved once at startup. A missing API key is a startup error, not
//! something a request discovers later. The server binary fills these from
//! CLI flags with environment fallbacks.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default per-request timeout for provider calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is required")]
    MissingApiKey,

    #[error("Invalid config value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Settings for [`crate::gemini::GeminiProvider`].
#[derive(Clone)]
pub struct GeminiConfig {
    /// Provider API key. Never logged.
    pub api_key: String,
    /// Model identifier sent with each call.
    pub model: String,
    /// API base URL. Any path it carries is kept as a prefix.
    pub base_url: Url,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl GeminiConfig {
    /// Config with the given key and defaults for everything else.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL).map_err(|e| ConfigError::Invalid {
                key: "GEMINI_BASE_URL",
                message: e.to_string(),
            })?,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the base URL (e.g. a local mock server or a path-prefixed proxy).
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url).map_err(|e| ConfigError::Invalid {
            key: "GEMINI_BASE_URL",
            message: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                key: "GEMINI_BASE_URL",
                message: format!("'{base_url}' cannot carry a path"),
            });
        }
        self.base_url = url;
        Ok(self)
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
