//! Gemini text-generation provider.
//!
//! Calls `POST {base}/v1beta/models/{model}:generateContent` with the API key
//! in the `x-goog-api-key` header. One attempt per call; no retries.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GeminiConfig;
use crate::generation::GenerationResult;
use crate::provider::{GenerationProvider, ProviderError};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// [`GenerationProvider`] backed by the Gemini REST API.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Build a provider with a pooled HTTP client using the configured timeout.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ProviderError::Transport(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// `{base}/v1beta/models/{model}:generateContent`, keeping any base path.
    ///
    /// An SDK-style `models/` prefix on the id is dropped; the rest is pushed
    /// as one escaped path segment.
    fn endpoint(&self, model: &str) -> Result<url::Url, ProviderError> {
        let model = model.strip_prefix("models/").unwrap_or(model);
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::Transport(format!(
                    "Base URL cannot carry a path: {}",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["v1beta", "models", &format!("{model}:generateContent")]);
        Ok(url)
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate_content(
        &self,
        model: &str,
        contents: &str,
    ) -> Result<GenerationResult, ProviderError> {
        let url = self.endpoint(model)?;
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: contents }],
            }],
        };

        debug!(%model, "calling generateContent");

        let resp = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(%model, timeout = e.is_timeout(), "Gemini request failed: {e}");
                ProviderError::Transport(format!("Gemini request failed: {e}"))
            })?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ProviderError::Transport(format!("Failed to read Gemini response: {e}")))?;

        if !status.is_success() {
            warn!(%model, status = status.as_u16(), "Gemini returned an error status");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text)
            .map_err(|e| ProviderError::Decode(format!("Gemini response parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_has_single_user_part() {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: "hello" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn endpoint_joins_model_path() {
        let config = GeminiConfig::new("key")
            .unwrap()
            .with_base_url("http://127.0.0.1:9999")
            .unwrap();
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.endpoint("gemini-2.5-flash").unwrap().as_str(),
            "http://127.0.0.1:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    fn provider_with_base(base_url: &str) -> GeminiProvider {
        let config = GeminiConfig::new("key")
            .unwrap()
            .with_base_url(base_url)
            .unwrap();
        GeminiProvider::new(config).unwrap()
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let expected = "http://proxy.local/gemini/v1beta/models/m:generateContent";
        assert_eq!(
            provider_with_base("http://proxy.local/gemini").endpoint("m").unwrap().as_str(),
            expected
        );
        assert_eq!(
            provider_with_base("http://proxy.local/gemini/").endpoint("m").unwrap().as_str(),
            expected
        );
    }

    #[test]
    fn endpoint_strips_models_prefix() {
        let provider = provider_with_base("http://127.0.0.1:9999");
        assert_eq!(
            provider.endpoint("models/gemini-2.5-flash").unwrap().as_str(),
            "http://127.0.0.1:9999/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn endpoint_escapes_model_id() {
        let provider = provider_with_base("http://127.0.0.1:9999");
        let url = provider.endpoint("a/b?c#d").unwrap();
        assert_eq!(url.path(), "/v1beta/models/a%2Fb%3Fc%23d:generateContent");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }
}
