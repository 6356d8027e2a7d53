//! Chat gateway.
//!
//! Builds the outbound prompt for a user message, makes one provider call and
//! returns the extracted reply. Provider failures are returned to the caller
//! untouched; only partial results are smoothed over by [`extract`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::extract::extract;
use crate::provider::{GenerationProvider, ProviderError};

/// Instruction appended to the user input in [`Mode::Optimize`].
pub const OPTIMIZE_SUFFIX: &str = "\n\nFirst state the time and space complexity of the code above. \
Then write a single replacement implementation with better complexity. \
Output only plain text and code, without markdown code fences or any other formatting markers.";

/// How the user input is turned into a prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Send the input verbatim.
    #[default]
    Plain,
    /// Append [`OPTIMIZE_SUFFIX`].
    Optimize,
}

#[derive(Debug, Error)]
#[error("Unknown chat mode: {0} (expected 'plain' or 'optimize')")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Mode::Plain),
            "optimize" => Ok(Mode::Optimize),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Plain => f.write_str("plain"),
            Mode::Optimize => f.write_str("optimize"),
        }
    }
}

/// Build the outbound prompt for `user_input`.
pub fn build_prompt(user_input: &str, mode: Mode) -> String {
    match mode {
        Mode::Plain => user_input.to_string(),
        Mode::Optimize => format!("{user_input}{OPTIMIZE_SUFFIX}"),
    }
}

/// Relays one user message to the provider and returns the reply text.
#[derive(Clone)]
pub struct ChatGateway {
    provider: Arc<dyn GenerationProvider>,
    model: String,
}

impl ChatGateway {
    pub fn new(provider: Arc<dyn GenerationProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Model identifier sent with every call.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `user_input` to the provider and return the extracted reply.
    #[instrument(skip(self, user_input), fields(model = %self.model, input_len = user_input.len()))]
    pub async fn converse(&self, user_input: &str, mode: Mode) -> Result<String, ProviderError> {
        let prompt = build_prompt(user_input, mode);
        debug!(%mode, prompt_len = prompt.len(), "sending prompt");

        let result = self.provider.generate_content(&self.model, &prompt).await?;
        Ok(extract(&result))
    }
}
