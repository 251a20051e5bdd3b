use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Every AI-backed feature degrades to static fallback content when
/// `GROQ_API_KEY` is absent, so nothing here is strictly required.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: Option<String>,
    pub groq_model: String,
    pub adzuna_app_id: String,
    pub adzuna_api_key: String,
    pub rapidapi_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            groq_api_key: optional_env("GROQ_API_KEY"),
            groq_model: std::env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama3-8b-8192".to_string()),
            adzuna_app_id: std::env::var("ADZUNA_APP_ID").unwrap_or_else(|_| "demo".to_string()),
            adzuna_api_key: std::env::var("ADZUNA_API_KEY").unwrap_or_else(|_| "demo".to_string()),
            rapidapi_key: optional_env("RAPIDAPI_KEY"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns `None` for unset or empty variables.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
