//! REST client for the `generateContent` endpoint.

use async_trait::async_trait;

use crate::config::GeminiConfig;
use crate::error::GeminiError;
use crate::messages::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};

/// A text-in, text-out generative model.
///
/// The API server holds one `Arc<dyn GenerativeModel>` in its state; tests
/// substitute their own implementation.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Name of the underlying model, for logging and the smoke-test endpoint.
    fn model_name(&self) -> &str;

    /// Send `prompt` and return the single text completion.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

/// HTTP client for the hosted Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with a fresh [`reqwest::Client`].
    ///
    /// Succeeds without an API key; calls then fail with
    /// [`GeminiError::MissingApiKey`].
    pub fn new(config: GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("taskdeck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; AI endpoints will fail until it is configured");
        }
        Self { client, config }
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into a structured [`GeminiError::Api`].
    async fn api_error(response: reqwest::Response) -> GeminiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => {
                let reason = envelope.error.reason().map(String::from);
                GeminiError::Api {
                    status,
                    code: envelope.error.status,
                    reason,
                    message: envelope.error.message,
                }
            }
            Err(_) => GeminiError::Api {
                status,
                code: None,
                reason: None,
                message: body,
            },
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeminiError::MissingApiKey)?;

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::api_error(response).await;
            tracing::warn!(model = %self.config.model, error = %err, "generateContent failed");
            return Err(err);
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text().ok_or_else(|| {
            let finish_reason = body
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "none".to_string());
            GeminiError::EmptyResponse(finish_reason)
        })
    }
}
