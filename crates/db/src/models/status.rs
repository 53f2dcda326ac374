//! Task workflow status, stored as the PostgreSQL enum `task_status`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Workflow state of a task. Serialized in kebab-case on the wire and in the
/// database (`todo`, `in-progress`, `done`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Wire / database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
        let parsed: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, TaskStatus::Done);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<TaskStatus>("\"blocked\"").is_err());
        assert!(serde_json::from_str::<TaskStatus>("\"in_progress\"").is_err());
    }

    #[test]
    fn default_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
        assert_eq!(TaskStatus::default().to_string(), "todo");
    }
}
