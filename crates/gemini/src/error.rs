//! Upstream failure types and their classification.
//!
//! Classification prefers structured signals from the HTTP response (status
//! code, canonical status name, error reason). Plain-text failures that carry
//! none of those fall back to substring matching on the message, which is
//! kept for compatibility with the messages clients already rely on.

/// Errors from calling the generative model.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// No API key is configured.
    #[error("Missing or invalid GEMINI_API_KEY.")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Gemini API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Canonical status name from the error body, if any.
        code: Option<String>,
        /// Machine-readable reason from the error details, if any.
        reason: Option<String>,
        /// Human-readable message (or raw body when unparseable).
        message: String,
    },

    /// The model answered but produced no text (e.g. blocked by safety filters).
    #[error("Model returned no text (finish reason: {0})")]
    EmptyResponse(String),
}

/// User-facing category of an upstream failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    MissingApiKey,
    InvalidApiKey,
    ModelNotFound,
    Other,
}

impl UpstreamErrorKind {
    /// Message shown to API clients, or `None` when the caller should use
    /// its own operation-specific fallback.
    pub fn user_message(self) -> Option<&'static str> {
        match self {
            UpstreamErrorKind::MissingApiKey => {
                Some("AI service is not configured: GEMINI_API_KEY is missing")
            }
            UpstreamErrorKind::InvalidApiKey => {
                Some("AI service rejected the configured API key")
            }
            UpstreamErrorKind::ModelNotFound => {
                Some("The configured AI model was not found or is not available")
            }
            UpstreamErrorKind::Other => None,
        }
    }
}

impl GeminiError {
    /// Classify this error, using structured data where available.
    pub fn kind(&self) -> UpstreamErrorKind {
        match self {
            GeminiError::MissingApiKey => UpstreamErrorKind::MissingApiKey,
            GeminiError::Api {
                status,
                code,
                reason,
                message,
            } => classify_api_error(*status, code.as_deref(), reason.as_deref())
                .unwrap_or_else(|| classify_message(message)),
            GeminiError::Request(err) => classify_message(&err.to_string()),
            GeminiError::EmptyResponse(_) => UpstreamErrorKind::Other,
        }
    }
}

/// Map structured API error data to a kind. `None` means "no structured signal".
fn classify_api_error(
    status: u16,
    code: Option<&str>,
    reason: Option<&str>,
) -> Option<UpstreamErrorKind> {
    match reason {
        Some("API_KEY_INVALID") | Some("API_KEY_EXPIRED") => {
            return Some(UpstreamErrorKind::InvalidApiKey)
        }
        Some("API_KEY_MISSING") => return Some(UpstreamErrorKind::MissingApiKey),
        _ => {}
    }

    match (status, code) {
        (401 | 403, _) | (_, Some("UNAUTHENTICATED" | "PERMISSION_DENIED")) => {
            Some(UpstreamErrorKind::InvalidApiKey)
        }
        (404, _) | (_, Some("NOT_FOUND")) => Some(UpstreamErrorKind::ModelNotFound),
        _ => None,
    }
}

/// Legacy substring classifier for failures that carry only text.
pub fn classify_message(message: &str) -> UpstreamErrorKind {
    let lower = message.to_lowercase();

    if lower.contains("missing or invalid gemini_api_key") || lower.contains("api key is missing") {
        UpstreamErrorKind::MissingApiKey
    } else if lower.contains("api_key_invalid") || lower.contains("api key not valid") {
        UpstreamErrorKind::InvalidApiKey
    } else if lower.contains("not found") || lower.contains("is not supported for generatecontent")
    {
        UpstreamErrorKind::ModelNotFound
    } else {
        UpstreamErrorKind::Other
    }
}
