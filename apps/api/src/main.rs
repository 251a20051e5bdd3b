mod ats;
mod config;
mod cover_letter;
mod errors;
mod extract;
mod jobs;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::providers::default_providers;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResuMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.groq_api_key.clone(), config.groq_model.clone());
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", llm.model());
    } else {
        info!("No GROQ_API_KEY set; running with offline fallbacks");
    }

    // Shared HTTP client for job-board providers
    let http = reqwest::Client::new();
    let providers = Arc::new(default_providers(
        config.adzuna_app_id.clone(),
        config.adzuna_api_key.clone(),
        config.rapidapi_key.clone(),
    ));

    // Build app state
    let state = AppState {
        llm,
        http,
        providers,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Tracing targets use the crate ident, not the package name, so the
/// hyphen must become an underscore or the directive matches nothing.
fn default_log_directive(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}
