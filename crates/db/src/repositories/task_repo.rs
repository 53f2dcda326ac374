//! Repository for the `tasks` table.

use futures::future::try_join_all;
use sqlx::PgPool;
use taskdeck_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskPositionUpdate, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, status, sort_order, created_date";

/// Provides CRUD and reorder operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under `project_id`, returning the created row.
    ///
    /// `status` defaults to `todo` and `order` to 0 when omitted. Returns
    /// `None` (and inserts nothing) if the project does not exist. The project
    /// row is key-share locked for the insert, so a concurrent
    /// [`ProjectRepo::delete_with_tasks`](crate::repositories::ProjectRepo::delete_with_tasks)
    /// either sees the new task or runs first and makes this return `None`.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let parent: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM projects WHERE id = $1 FOR KEY SHARE")
                .bind(project_id)
                .fetch_optional(&mut *tx)
                .await?;

        if parent.is_none() {
            tx.rollback().await?;
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO tasks (project_id, title, description, status, sort_order)
             VALUES ($1, $2, $3, COALESCE($4, 'todo'::task_status), COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        let task = sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.order)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(task))
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List tasks of a project by manual order, oldest first within a rank.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = $1
             ORDER BY sort_order ASC, created_date ASC, id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status)
            .bind(input.order)
            .fetch_optional(pool)
            .await
    }

    /// Apply a status/order patch to the task `id`.
    pub async fn update_position(
        pool: &PgPool,
        id: DbId,
        patch: &TaskPositionUpdate,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                status = COALESCE($2, status),
                sort_order = COALESCE($3, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(patch.status)
            .bind(patch.order)
            .fetch_optional(pool)
            .await
    }

    /// Apply every patch as its own statement, concurrently.
    ///
    /// The result is aligned with `patches`. Undecodable entries, ids that are
    /// not positive integers and unknown ids all yield `None`. There is no
    /// transaction across items, so writes that completed before a failing
    /// item stay applied.
    pub async fn bulk_update_positions(
        pool: &PgPool,
        patches: &[Option<TaskPositionUpdate>],
    ) -> Result<Vec<Option<Task>>, sqlx::Error> {
        try_join_all(patches.iter().map(|entry| async move {
            match entry.as_ref().and_then(|patch| patch.task_id().map(|id| (id, patch))) {
                Some((id, patch)) => Self::update_position(pool, id, patch).await,
                None => Ok(None),
            }
        }))
        .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
