//! Gemchat HTTP server binary.
//!
//! Serves the chat page and relays `POST /chat` to the Gemini API.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use gemchat_core::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use gemchat_core::gateway::{ChatGateway, Mode};
use gemchat_core::gemini::GeminiProvider;
use tracing::{error, info};

/// CLI arguments for the chat server.
#[derive(Parser, Debug)]
#[command(name = "gemchat_server", about = "Gemchat web chat relay")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind_addr: String,

    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model identifier passed to generateContent.
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Gemini API base URL.
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout for a single provider call, in seconds.
    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    timeout_secs: u64,

    /// Prompt mode used when a request does not specify one (`plain` or `optimize`).
    #[arg(long, env = "CHAT_MODE", default_value_t = Mode::Plain)]
    mode: Mode,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,gemchat_api=debug,gemchat_core=debug")
            }),
        )
        .init();

    let args = Args::parse();

    // Fail before binding if the provider cannot be configured.
    let gemini_config = GeminiConfig::new(args.api_key.unwrap_or_default())
        .and_then(|c| c.with_base_url(&args.base_url))
        .map(|c| {
            c.with_model(args.model)
                .with_request_timeout(Duration::from_secs(args.timeout_secs))
        })
        .inspect_err(|e| error!("invalid provider configuration: {e}"))?;

    info!(
        version = gemchat_core::version(),
        model = %gemini_config.model,
        base_url = %gemini_config.base_url,
        timeout_secs = args.timeout_secs,
        mode = %args.mode,
        "starting gemchat_server"
    );

    let model = gemini_config.model.clone();
    let provider = GeminiProvider::new(gemini_config)?;

    let state = gemchat_api::AppState {
        gateway: ChatGateway::new(Arc::new(provider), model),
        config: gemchat_api::config::ApiConfig {
            bind_addr: args.bind_addr,
            default_mode: args.mode,
        },
    };

    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    let app = gemchat_api::router(state);

    info!(addr = %local_addr, "chat server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("chat server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for ctrl-c: {e}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
