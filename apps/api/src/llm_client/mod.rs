/// LLM Client — the single point of entry for all text-generation calls.
///
/// ARCHITECTURAL RULE: No other module may call the Groq API directly.
/// All LLM interactions MUST go through this module, and every caller
/// recovers from failure via `or_fallback` — an LLM outage never surfaces
/// as a user-facing error.
use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// One bounded attempt per call; failures are converted to fallback content
/// by the caller, never retried.
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client shared by all services.
/// Constructed once in `main` from explicit config values; a missing API
/// key yields `LlmError::Unconfigured` on every call, which takes the same
/// fallback path as any other service failure.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes a single bounded chat-completion call and returns the reply text.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::Unconfigured)?;

        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded: {} chars", content.len());
        Ok(content)
    }
}

/// Awaits an LLM-backed operation and substitutes a precomputed
/// deterministic value on any failure class. The failure is logged and
/// never propagates past this boundary.
pub async fn or_fallback<T, F, Fb>(context: &str, operation: F, fallback: Fb) -> T
where
    F: Future<Output = Result<T, LlmError>>,
    Fb: FnOnce() -> T,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            warn!("{context}: LLM unavailable, using static fallback: {e}");
            fallback()
        }
    }
}

/// Truncates to at most `max_chars` characters on a char boundary.
/// Prompt inputs are bounded this way before embedding.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("resume", 1000), "resume");
    }

    #[test]
    fn test_truncate_chars_cuts_at_limit() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        let text = "résumé";
        assert_eq!(truncate_chars(text, 4), "résu");
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let llm = LlmClient::new(None, "llama3-8b-8192".to_string());
        let err = llm.complete("system", "user", 100, 0.2).await.unwrap_err();
        assert!(matches!(err, LlmError::Unconfigured));
    }

    #[tokio::test]
    async fn test_or_fallback_passes_through_success() {
        let value = or_fallback("test", async { Ok::<_, LlmError>(42) }, || 0).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_or_fallback_substitutes_on_failure() {
        let value = or_fallback(
            "test",
            async { Err::<i32, _>(LlmError::EmptyContent) },
            || 7,
        )
        .await;
        assert_eq!(value, 7);
    }
}
