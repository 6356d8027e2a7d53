//! API server configuration.

use gemchat_core::gateway::Mode;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Prompt mode used when a request does not pick one.
    pub default_mode: Mode,
}
