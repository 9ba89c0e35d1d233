//! Environment-driven assistant configuration.

use std::env;

/// Default generative-language endpoint base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for free-text chat (fast tier).
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for structured quotation drafting (reasoning tier).
pub const DEFAULT_QUOTE_MODEL: &str = "gemini-3-pro-preview";

/// Connection settings for the completion endpoint.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// Base HTTP URL of the generative-language API.
    pub api_url: String,
    /// API key passed as the `key` query parameter.
    pub api_key: String,
    /// Model used for chat completions.
    pub chat_model: String,
    /// Model used for schema-constrained quotation drafts.
    pub quote_model: String,
}

impl AssistantConfig {
    /// Build a config from an API key with default endpoint and models.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: api_key.into(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            quote_model: DEFAULT_QUOTE_MODEL.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// Loads `.env` if present. `GEMINI_API_KEY` is required; the
    /// endpoint and model names fall back to the defaults when the
    /// corresponding variables are unset.
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("GEMINI_API_KEY")?;
        let mut config = Self::new(api_key);
        if let Ok(url) = env::var("GEMINI_API_URL") {
            config.api_url = url;
        }
        if let Ok(model) = env::var("GEMINI_CHAT_MODEL") {
            config.chat_model = model;
        }
        if let Ok(model) = env::var("GEMINI_QUOTE_MODEL") {
            config.quote_model = model;
        }
        Ok(config)
    }
}
