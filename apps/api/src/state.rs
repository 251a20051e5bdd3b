use std::sync::Arc;

use crate::config::Config;
use crate::jobs::JobProvider;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Nothing here is mutable: requests are fully independent.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Shared HTTP client for job-board providers.
    pub http: reqwest::Client,
    /// Provider stack for job search, in merge order.
    pub providers: Arc<Vec<Box<dyn JobProvider>>>,
    pub config: Config,
}
