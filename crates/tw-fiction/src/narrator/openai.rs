//! OpenAI-compatible chat-completion client.

use serde::Deserialize;
use serde_json::json;

use super::client::{CompletionError, CompletionRequest, TextCompletion};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// A missing API key is not an error at construction; the first completion
/// attempt fails with [`CompletionError::MissingApiKey`] without touching
/// the network. Timeouts are whatever the HTTP client defaults to.
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OpenAiClient {
    /// Build a client from `OPENAI_API_KEY` and optional `OPENAI_API_BASE`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            std::env::var("OPENAI_API_KEY").ok(),
        )
    }

    /// Build a client against a specific endpoint.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }
}

impl TextCompletion for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(CompletionError::MissingApiKey)?;

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = json!({
            "model": request.model,
            "messages": [
                {"role": "system", "content": request.system_prompt},
                {"role": "user", "content": request.user_prompt},
            ],
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        let response = self.http.post(url).bearer_auth(api_key).json(&body).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Malformed("no choices in response".to_string()))
    }
}
