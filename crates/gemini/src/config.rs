/// Default model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default REST endpoint base when `GEMINI_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Generative model configuration loaded from environment variables.
///
/// A missing API key is not an error here: every generation call fails
/// with [`GeminiError::MissingApiKey`](crate::GeminiError::MissingApiKey)
/// instead, so the rest of the server keeps working.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key (`GEMINI_API_KEY`). Blank values are treated as unset.
    pub api_key: Option<String>,
    /// Model name (default: `gemini-2.5-pro`).
    pub model: String,
    /// REST base URL without trailing slash.
    pub api_base: String,
}

impl GeminiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default                                             |
    /// |-------------------|-----------------------------------------------------|
    /// | `GEMINI_API_KEY`  | unset                                               |
    /// | `GEMINI_MODEL`    | `gemini-2.5-pro`                                    |
    /// | `GEMINI_API_BASE` | `https://generativelanguage.googleapis.com/v1beta`  |
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let api_base = std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());

        Self::new(api_key, model, api_base)
    }

    /// Build a configuration, normalising blank keys and trailing slashes.
    pub fn new(api_key: Option<String>, model: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        let api_base = api_base.into().trim_end_matches('/').to_string();

        Self {
            api_key,
            model: model.into(),
            api_base,
        }
    }

    /// Full URL of the `generateContent` method for the configured model.
    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}
