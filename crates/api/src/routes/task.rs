//! Task routes. Creation and listing are scoped under the owning project id,
//! everything else addresses a task directly.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes merged at the API root.
///
/// ```text
/// GET    /{project_id}/tasks   -> list_by_project
/// POST   /{project_id}/tasks   -> create
/// PUT    /tasks/bulk           -> bulk_update
/// GET    /tasks/{id}           -> get_by_id
/// PUT    /tasks/{id}           -> update
/// DELETE /tasks/{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{project_id}/tasks",
            get(task::list_by_project).post(task::create),
        )
        .route("/tasks/bulk", put(task::bulk_update))
        .route(
            "/tasks/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
}
