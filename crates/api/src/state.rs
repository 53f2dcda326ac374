use std::sync::Arc;

use taskdeck_gemini::GenerativeModel;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskdeck_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generative model used by the AI assistant routes.
    pub model: Arc<dyn GenerativeModel>,
}
