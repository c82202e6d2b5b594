use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task as reported by the console.
///
/// The console sends free-form status strings. Known lifecycle states map to
/// their own variant; anything mentioning `error` is a failure and keeps the
/// raw string (e.g. `"error: access denied"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    Preprocessing,
    Submitted,
    Processing,
    Processed,
    Success,
    Completed,
    Error(String),
    Other(String),
}

impl TaskStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, TaskStatus::Error(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Preprocessing => "preprocessing",
            TaskStatus::Submitted => "submitted",
            TaskStatus::Processing => "processing",
            TaskStatus::Processed => "processed",
            TaskStatus::Success => "success",
            TaskStatus::Completed => "completed",
            TaskStatus::Error(raw) | TaskStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "preprocessing" => TaskStatus::Preprocessing,
            "submitted" => TaskStatus::Submitted,
            "processing" => TaskStatus::Processing,
            "processed" => TaskStatus::Processed,
            "success" => TaskStatus::Success,
            "completed" => TaskStatus::Completed,
            s if s.contains("error") => TaskStatus::Error(raw),
            _ => TaskStatus::Other(raw),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(raw: &str) -> Self {
        TaskStatus::from(raw.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Error(raw) | TaskStatus::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only snapshot of a task, supplied with every render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskState {
    pub status: TaskStatus,

    #[serde(default)]
    pub completed: bool,

    /// Parameters the task was issued with; JSON-encoded for most commands
    #[serde(default)]
    pub original_params: Option<String>,

    /// Human readable rendering of the parameters
    #[serde(default)]
    pub display_params: String,
}

impl TaskState {
    pub fn new(status: impl Into<TaskStatus>) -> Self {
        Self {
            status: status.into(),
            completed: false,
            original_params: None,
            display_params: String::new(),
        }
    }

    pub fn mark_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn with_original_params(mut self, params: impl Into<String>) -> Self {
        self.original_params = Some(params.into());
        self
    }

    pub fn with_display_params(mut self, params: impl Into<String>) -> Self {
        self.display_params = params.into();
        self
    }

    pub fn is_failed(&self) -> bool {
        self.status.is_failure()
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_prefix_is_failure() {
        let status = TaskStatus::from("error: access denied");
        assert!(status.is_failure());
        assert_eq!(status.as_str(), "error: access denied");
    }

    #[test]
    fn test_status_known_states() {
        assert_eq!(TaskStatus::from("processed"), TaskStatus::Processed);
        assert_eq!(TaskStatus::from("success"), TaskStatus::Success);
        assert_eq!(
            TaskStatus::from("delegating"),
            TaskStatus::Other("delegating".to_string())
        );
        assert!(!TaskStatus::from("completed").is_failure());
    }

    #[test]
    fn test_task_state_from_console_json() -> crate::Result<()> {
        let task = TaskState::from_json(
            r#"{"task_id": 12, "status": "success", "completed": true,
                "original_params": null, "display_params": "/tmp/a.txt"}"#,
        )?;

        assert_eq!(task.status, TaskStatus::Success);
        assert!(task.completed);
        assert_eq!(task.original_params, None);
        assert_eq!(task.display_params, "/tmp/a.txt");
        Ok(())
    }

    #[test]
    fn test_task_state_defaults() -> crate::Result<()> {
        let task = TaskState::from_json(r#"{"status": "processing"}"#)?;
        assert!(!task.completed);
        assert!(task.display_params.is_empty());
        Ok(())
    }
}
