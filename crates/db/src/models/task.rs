//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::prompt::PromptTask;
use taskdeck_core::types::{DbId, Timestamp};
use taskdeck_core::validation::RawId;

use crate::models::status::TaskStatus;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_date: Timestamp,
}

impl Task {
    /// Borrow the fields the AI prompt builder needs.
    pub fn as_prompt_task(&self) -> PromptTask<'_> {
        PromptTask {
            status: self.status.as_str(),
            title: &self.title,
            description: &self.description,
        }
    }
}

/// DTO for creating a task. The parent project comes from the URL path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Defaults to `todo` if omitted.
    pub status: Option<TaskStatus>,
    /// Defaults to 0 if omitted.
    pub order: Option<i32>,
}

/// DTO for updating a task. Only supplied fields are changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub order: Option<i32>,
}

/// One entry of a bulk reorder request.
///
/// `id` may arrive as a number or a numeric string.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskPositionUpdate {
    pub id: RawId,
    pub status: Option<TaskStatus>,
    pub order: Option<i32>,
}

impl TaskPositionUpdate {
    /// The target task, or `None` when `id` is not a positive integer.
    pub fn task_id(&self) -> Option<DbId> {
        self.id.parse("task").ok()
    }
}

/// Body of `PUT /api/tasks/bulk`.
///
/// `tasks` is kept as raw JSON so that each entry is decoded on its own; a
/// malformed entry only affects its own slot in the result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkTaskUpdate {
    pub tasks: Option<serde_json::Value>,
}

impl BulkTaskUpdate {
    /// Decode every entry independently.
    ///
    /// Returns `None` unless `tasks` is a non-empty array. Entries that do
    /// not decode to a [`TaskPositionUpdate`] come back as `None`.
    pub fn entries(&self) -> Option<Vec<Option<TaskPositionUpdate>>> {
        let items = self.tasks.as_ref()?.as_array()?;
        if items.is_empty() {
            return None;
        }
        Some(
            items
                .iter()
                .map(|item| TaskPositionUpdate::deserialize(item).ok())
                .collect(),
        )
    }
}
