//! # gemchat_core
//!
//! Core chat relay logic for Gemchat.
//!
//! # Public API
//!
//! - [`gateway::ChatGateway`] — builds the outbound prompt and returns the reply text
//! - [`extract::extract`] — turns any [`generation::GenerationResult`] into a display string
//! - [`provider::GenerationProvider`] — the seam to the text-generation backend
//! - [`gemini::GeminiProvider`] — the Gemini `generateContent` implementation
//! - [`config::GeminiConfig`] — provider settings resolved at startup

pub mod config;
pub mod extract;
pub mod gateway;
pub mod gemini;
pub mod generation;
pub mod provider;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
