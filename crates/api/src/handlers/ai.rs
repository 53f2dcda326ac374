//! Handlers for the AI assistant routes.
//!
//! Each handler resolves a project and its tasks, renders a prompt with
//! [`taskdeck_core::prompt`], sends it to the configured [`GenerativeModel`]
//! and wraps the single text completion in the response envelope.
//!
//! [`GenerativeModel`]: taskdeck_gemini::GenerativeModel

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskdeck_core::error::CoreError;
use taskdeck_core::prompt::{self, AiOperation, PromptTask};
use taskdeck_core::types::DbId;
use taskdeck_core::validation::{is_blank, parse_id, RawId};
use taskdeck_db::models::project::Project;
use taskdeck_db::models::task::Task;
use taskdeck_db::repositories::{ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Body of the project-scoped Q&A route.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionRequest {
    pub question: Option<String>,
}

/// Body of `POST /api/ai/qa`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuestionRequest {
    pub task_id: Option<RawId>,
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummaryData {
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerData {
    pub answer: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsData {
    pub suggestions: String,
}

#[derive(Debug, Serialize)]
pub struct ModelTestData {
    pub model: String,
    pub response: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a project and its ordered tasks, requiring at least one task.
async fn load_context(state: &AppState, project_id: DbId) -> AppResult<(Project, Vec<Task>)> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let tasks = TaskRepo::list_by_project(&state.pool, project_id).await?;
    if tasks.is_empty() {
        return Err(CoreError::Validation("No tasks found for this project".into()).into());
    }

    Ok((project, tasks))
}

fn prompt_tasks(tasks: &[Task]) -> Vec<PromptTask<'_>> {
    tasks.iter().map(Task::as_prompt_task).collect()
}

/// Require a non-blank question and return it trimmed.
fn require_question(question: Option<String>) -> AppResult<String> {
    if is_blank(question.as_deref()) {
        return Err(CoreError::Validation("Question is required".into()).into());
    }
    Ok(question.unwrap_or_default().trim().to_string())
}

/// Send a prompt to the model, tagging failures with the operation.
async fn generate(state: &AppState, operation: AiOperation, prompt: &str) -> AppResult<String> {
    tracing::debug!(?operation, model = state.model.model_name(), "Generating completion");
    state
        .model
        .generate(prompt)
        .await
        .map_err(|source| AppError::upstream(operation, source))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/ai/{project_id}/summarize
pub async fn summarize_project(
    State(state): State<AppState>,
    ApiPath(raw_project_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<SummaryData>>> {
    let project_id = parse_id("project", &raw_project_id)?;
    let (project, tasks) = load_context(&state, project_id).await?;

    let prompt = prompt::summary_prompt(&project.name, &prompt_tasks(&tasks));
    let summary = generate(&state, AiOperation::Summary, &prompt).await?;

    tracing::info!(project_id, tasks = tasks.len(), "Project summary generated");

    Ok(Json(
        ApiResponse::data(SummaryData { summary })
            .with_message(AiOperation::Summary.success_message()),
    ))
}

/// POST /api/ai/{project_id}/ask
pub async fn ask_question(
    State(state): State<AppState>,
    ApiPath(raw_project_id): ApiPath<String>,
    ApiJson(input): ApiJson<QuestionRequest>,
) -> AppResult<Json<ApiResponse<AnswerData>>> {
    let project_id = parse_id("project", &raw_project_id)?;
    let (project, tasks) = load_context(&state, project_id).await?;
    let question = require_question(input.question)?;

    let prompt = prompt::question_prompt(&project.name, &prompt_tasks(&tasks), &question);
    let answer = generate(&state, AiOperation::Question, &prompt).await?;

    tracing::info!(project_id, tasks = tasks.len(), "Project question answered");

    Ok(Json(
        ApiResponse::data(AnswerData {
            answer,
            question,
            task_id: None,
        })
        .with_message(AiOperation::Question.success_message()),
    ))
}

/// POST /api/ai/qa
///
/// Answer a question about one task, using its whole project as context.
pub async fn ask_task_question(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<TaskQuestionRequest>,
) -> AppResult<Json<ApiResponse<AnswerData>>> {
    let task_id = input
        .task_id
        .ok_or_else(|| CoreError::Validation("taskId is required".into()))?
        .parse("task")?;

    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    let (project, tasks) = load_context(&state, task.project_id).await?;
    let question = require_question(input.question)?;

    let prompt = prompt::task_question_prompt(
        &project.name,
        &prompt_tasks(&tasks),
        &task.as_prompt_task(),
        &question,
    );
    let answer = generate(&state, AiOperation::Question, &prompt).await?;

    tracing::info!(task_id, project_id = project.id, "Task question answered");

    Ok(Json(
        ApiResponse::data(AnswerData {
            answer,
            question,
            task_id: Some(task_id),
        })
        .with_message(AiOperation::Question.success_message()),
    ))
}

/// POST /api/ai/{project_id}/suggestions
pub async fn task_suggestions(
    State(state): State<AppState>,
    ApiPath(raw_project_id): ApiPath<String>,
) -> AppResult<Json<ApiResponse<SuggestionsData>>> {
    let project_id = parse_id("project", &raw_project_id)?;
    let (_project, tasks) = load_context(&state, project_id).await?;

    let prompt = prompt::suggestions_prompt(&prompt_tasks(&tasks));
    let suggestions = generate(&state, AiOperation::Suggestions, &prompt).await?;

    tracing::info!(project_id, tasks = tasks.len(), "Task suggestions generated");

    Ok(Json(
        ApiResponse::data(SuggestionsData { suggestions })
            .with_message(AiOperation::Suggestions.success_message()),
    ))
}

/// GET /api/test-gemini-model
///
/// Send a fixed prompt to verify the model is reachable and the key works.
pub async fn test_model(State(state): State<AppState>) -> AppResult<Json<ApiResponse<ModelTestData>>> {
    let response = generate(&state, AiOperation::ModelTest, prompt::MODEL_TEST_PROMPT).await?;

    Ok(Json(
        ApiResponse::data(ModelTestData {
            model: state.model.model_name().to_string(),
            response,
        })
        .with_message(AiOperation::ModelTest.success_message()),
    ))
}
