//! The text-completion capability boundary.

use thiserror::Error;

/// A single completion request: the two-message instruction payload plus
/// generation parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier passed through to the service.
    pub model: String,
    /// System-level framing instruction.
    pub system_prompt: String,
    /// User-level payload.
    pub user_prompt: String,
    /// Output length budget in tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Errors from a completion attempt.
///
/// The narrator treats every variant identically — one fallback path. The
/// distinctions exist only so the diagnostic log line is useful.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key was configured.
    #[error("no api key configured (set OPENAI_API_KEY)")]
    MissingApiKey,

    /// The request could not be sent or the response not received.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned http {0}")]
    Status(u16),

    /// The response body did not contain generated text.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A synchronous text-completion service.
///
/// Implementations perform exactly one generation attempt per call; retry
/// and fallback policy belong to the caller.
pub trait TextCompletion {
    /// Generate text for the given request.
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}
