//! Narrator generation parameters.

/// Generation parameters sent with every completion request.
///
/// The default temperature deliberately favors varied prose over
/// determinism: repeating the same look command is not expected to produce
/// identical text.
#[derive(Debug, Clone)]
pub struct NarratorConfig {
    /// Model identifier.
    pub model: String,
    /// Output length budget in tokens.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

impl NarratorConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the output length budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
