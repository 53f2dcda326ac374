//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskdeck_core::error::CoreError;
use taskdeck_core::types::DbId;
use taskdeck_core::validation::{parse_id, reject_blank, require_fields, trimmed};
use taskdeck_db::models::project::{CreateProject, Project, ProjectDeletion, UpdateProject};
use taskdeck_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ApiResponse<Project>>)> {
    require_fields(
        &[input.name.as_deref(), input.description.as_deref()],
        "Name and description are required",
    )?;

    let input = CreateProject {
        name: trimmed(input.name.as_deref()),
        description: input.description,
    };
    let project = ProjectRepo::create(&state.pool, &input).await?;

    tracing::info!(project_id = project.id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(project).with_message("Project created successfully")),
    ))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ApiResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    let count = projects.len();
    Ok(Json(ApiResponse::data(projects).with_count(count)))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let id = parse_id("project", &raw_id)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::data(project)))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<ApiResponse<Project>>> {
    let id = parse_id("project", &raw_id)?;
    reject_blank("Name", input.name.as_deref())?;
    reject_blank("Description", input.description.as_deref())?;

    let input = UpdateProject {
        name: trimmed(input.name.as_deref()),
        description: input.description,
    };
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(project_id = id, "Project updated");

    Ok(Json(
        ApiResponse::data(project).with_message("Project updated successfully"),
    ))
}

/// DELETE /api/projects/{id}
///
/// Removes the project and all of its tasks.
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(raw_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<ProjectDeletion>>> {
    let id = parse_id("project", &raw_id)?;
    let deletion = ProjectRepo::delete_with_tasks(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(
        project_id = id,
        deleted_tasks = deletion.deleted_tasks,
        "Project deleted"
    );

    Ok(Json(
        ApiResponse::data(deletion).with_message("Project and associated tasks deleted successfully"),
    ))
}
