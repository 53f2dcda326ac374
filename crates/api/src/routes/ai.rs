//! AI assistant routes mounted at `/ai`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// ```text
/// GET|POST /{project_id}/summarize     -> summarize_project
/// POST     /{project_id}/ask           -> ask_question
/// POST     /{project_id}/qa            -> ask_question
/// POST     /qa                         -> ask_task_question
/// GET|POST /{project_id}/suggestions   -> task_suggestions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/qa", post(ai::ask_task_question))
        .route(
            "/{project_id}/summarize",
            get(ai::summarize_project).post(ai::summarize_project),
        )
        .route("/{project_id}/ask", post(ai::ask_question))
        .route("/{project_id}/qa", post(ai::ask_question))
        .route(
            "/{project_id}/suggestions",
            get(ai::task_suggestions).post(ai::task_suggestions),
        )
}
