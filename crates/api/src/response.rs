//! Shared response envelope for API handlers.
//!
//! Every endpoint answers with
//! `{ "success": bool, "data"?: T, "message"?: string, "error"?: string, "count"?: number }`.
//! Absent members are omitted from the JSON rather than serialized as `null`.

use serde::Serialize;

/// Uniform response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::data(projects).with_count(n)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
            count: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    /// Successful response with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
            count: None,
        }
    }

    /// Failed response with a user-facing message and optional raw error text.
    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            error,
            count: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_envelope_omits_absent_members() {
        let value = serde_json::to_value(ApiResponse::data(vec![1, 2]).with_count(2)).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2], "count": 2}));
    }

    #[test]
    fn message_envelope_has_no_data() {
        let value = serde_json::to_value(ApiResponse::message("Task deleted successfully")).unwrap();
        assert_eq!(value, json!({"success": true, "message": "Task deleted successfully"}));
    }

    #[test]
    fn failure_envelope_carries_error_text() {
        let value = serde_json::to_value(ApiResponse::failure(
            "Error generating summary",
            Some("boom".into()),
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({"success": false, "message": "Error generating summary", "error": "boom"})
        );
    }

    #[test]
    fn null_entries_inside_data_are_preserved() {
        let value = serde_json::to_value(ApiResponse::data(vec![None, Some(3)])).unwrap();
        assert_eq!(value["data"], json!([null, 3]));
    }
}
