//! Prompt construction for the AI assistant.
//!
//! Each project task is rendered as one numbered line:
//!
//! ```text
//! 1. [IN-PROGRESS] Wire up login: Hook the form to the auth endpoint
//! ```
//!
//! The task list is then embedded into an operation-specific instruction
//! before being sent to the generative model.

/// Borrowed view of a task as needed for prompt rendering.
#[derive(Debug, Clone, Copy)]
pub struct PromptTask<'a> {
    /// Wire form of the status (`todo`, `in-progress`, `done`).
    pub status: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// The assistant operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiOperation {
    Summary,
    Question,
    Suggestions,
    ModelTest,
}

impl AiOperation {
    /// Fallback user-facing message when the upstream failure is unclassified.
    pub fn failure_message(self) -> &'static str {
        match self {
            AiOperation::Summary => "Error generating summary",
            AiOperation::Question => "Error answering question",
            AiOperation::Suggestions => "Error generating suggestions",
            AiOperation::ModelTest => "Error testing model connection",
        }
    }

    /// Message attached to a successful response.
    pub fn success_message(self) -> &'static str {
        match self {
            AiOperation::Summary => "Project summary generated successfully",
            AiOperation::Question => "Answer generated successfully",
            AiOperation::Suggestions => "Suggestions generated successfully",
            AiOperation::ModelTest => "Model connection successful",
        }
    }
}

/// Render a single task line without the index prefix.
fn render_task(task: &PromptTask<'_>) -> String {
    format!(
        "[{}] {}: {}",
        task.status.to_uppercase(),
        task.title,
        task.description
    )
}

/// Render tasks as newline-joined, 1-based numbered lines in input order.
pub fn render_task_list(tasks: &[PromptTask<'_>]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, render_task(task)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt asking for a concise status overview of the project.
pub fn summary_prompt(project_name: &str, tasks: &[PromptTask<'_>]) -> String {
    format!(
        "Summarize the following project tasks in a concise way. Project name: \"{project_name}\":\n\n{}\n\n\
         Provide a brief overview of the project status, what's completed, in progress, and pending.",
        render_task_list(tasks)
    )
}

/// Prompt answering a free-form question about the project's tasks.
pub fn question_prompt(project_name: &str, tasks: &[PromptTask<'_>], question: &str) -> String {
    format!(
        "Based on these project tasks for \"{project_name}\":\n\n{}\n\nAnswer this question: {question}",
        render_task_list(tasks)
    )
}

/// Prompt answering a question focused on one task, with the whole project as context.
pub fn task_question_prompt(
    project_name: &str,
    tasks: &[PromptTask<'_>],
    focus: &PromptTask<'_>,
    question: &str,
) -> String {
    format!(
        "Based on these project tasks for \"{project_name}\":\n\n{}\n\n\
         The question concerns task \"{}\" (status: {}): {}\n\n\
         Answer this question: {question}",
        render_task_list(tasks),
        focus.title,
        focus.status.to_uppercase(),
        focus.description,
    )
}

/// Prompt asking for prioritization and workflow suggestions.
pub fn suggestions_prompt(tasks: &[PromptTask<'_>]) -> String {
    format!(
        "Analyze these project tasks and provide suggestions for prioritization and task management:\n\n{}\n\n\
         Provide actionable suggestions for improving workflow and task priorities.",
        render_task_list(tasks)
    )
}

/// Fixed prompt used by the model connectivity smoke test.
pub const MODEL_TEST_PROMPT: &str = "Reply with a short greeting to confirm the connection works.";
