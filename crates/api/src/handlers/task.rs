//! Handlers for tasks: project-scoped create/list plus id-addressed
//! get/update/delete and the bulk reorder endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_core::validation::{parse_id, reject_blank, require_fields, trimmed};
use taskdeck_db::models::task::{BulkTaskUpdate, CreateTask, Task, UpdateTask};
use taskdeck_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::state::AppState;

fn task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Task", id })
}

fn project_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

// ---------------------------------------------------------------------------
// Project-scoped
// ---------------------------------------------------------------------------

/// POST /api/{project_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    ApiPath(raw_project_id): ApiPath<String>,
    ApiJson(input): ApiJson<CreateTask>,
) -> AppResult<(StatusCode, Json<ApiResponse<Task>>)> {
    let project_id = parse_id("project", &raw_project_id)?;
    require_fields(
        &[input.title.as_deref(), input.description.as_deref()],
        "Title and description are required",
    )?;

    let input = CreateTask {
        title: trimmed(input.title.as_deref()),
        ..input
    };
    let task = TaskRepo::create(&state.pool, project_id, &input)
        .await?
        .ok_or_else(|| project_not_found(project_id))?;

    tracing::info!(task_id = task.id, project_id, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(task).with_message("Task created successfully")),
    ))
}

/// GET /api/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    ApiPath(raw_project_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<Vec<Task>>>> {
    let project_id = parse_id("project", &raw_project_id)?;
    if !ProjectRepo::exists(&state.pool, project_id).await? {
        return Err(project_not_found(project_id));
    }

    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    let count = tasks.len();
    Ok(Json(ApiResponse::data(tasks).with_count(count)))
}

// ---------------------------------------------------------------------------
// Id-addressed
// ---------------------------------------------------------------------------

/// GET /api/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let id = parse_id("task", &raw_id)?;
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| task_not_found(id))?;
    Ok(Json(ApiResponse::data(task)))
}

/// PUT /api/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
    ApiJson(input): ApiJson<UpdateTask>,
) -> AppResult<Json<ApiResponse<Task>>> {
    let id = parse_id("task", &raw_id)?;
    reject_blank("Title", input.title.as_deref())?;
    reject_blank("Description", input.description.as_deref())?;

    let input = UpdateTask {
        title: trimmed(input.title.as_deref()),
        ..input
    };
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| task_not_found(id))?;

    tracing::info!(task_id = id, status = %task.status, order = task.order, "Task updated");

    Ok(Json(
        ApiResponse::data(task).with_message("Task updated successfully"),
    ))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    let id = parse_id("task", &raw_id)?;
    if !TaskRepo::delete(&state.pool, id).await? {
        return Err(task_not_found(id));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(Json(ApiResponse::message("Task deleted successfully")))
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

/// PUT /api/tasks/bulk
///
/// Apply `{id, status, order}` patches independently. The response lists the
/// updated tasks in request order, with `null` for entries that are malformed
/// or name a task that does not exist.
pub async fn bulk_update(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<BulkTaskUpdate>,
) -> AppResult<Json<ApiResponse<Vec<Option<Task>>>>> {
    let patches = input
        .entries()
        .ok_or_else(|| CoreError::Validation("Invalid tasks array".into()))?;

    let results = TaskRepo::bulk_update_positions(&state.pool, &patches).await?;
    let updated = results.iter().filter(|r| r.is_some()).count();

    tracing::info!(
        requested = patches.len(),
        updated,
        "Bulk task update applied"
    );

    Ok(Json(
        ApiResponse::data(results).with_message("Tasks updated successfully"),
    ))
}
