//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskdeck_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_date: Timestamp,
}

/// DTO for creating a new project.
///
/// Fields are optional at the deserialization level so that missing values
/// surface as validation errors rather than body-parsing failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Outcome of deleting a project together with its tasks.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDeletion {
    pub id: DbId,
    pub deleted_tasks: u64,
}
