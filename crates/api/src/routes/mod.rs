pub mod ai;
pub mod health;
pub mod project;
pub mod task;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete (cascades to tasks)
///
/// /{project_id}/tasks                              list, create
/// /tasks/{id}                                      get, update, delete
/// /tasks/bulk                                      bulk status/order update (PUT)
///
/// /ai/{project_id}/summarize                       project summary (GET, POST)
/// /ai/{project_id}/ask                             question about a project (POST)
/// /ai/{project_id}/qa                              alias of ask (POST)
/// /ai/qa                                           question about a task (POST)
/// /ai/{project_id}/suggestions                     next-step suggestions (GET, POST)
///
/// /test-gemini-model                               model connectivity check
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .merge(task::router())
        .nest("/ai", ai::router())
        .route("/test-gemini-model", get(handlers::ai::test_model))
}
