use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random TaskId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TaskId {
    type Err = crate::error::WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| crate::error::WorkspaceError::InvalidTaskId(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A checklist entry belonging to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Subtask {
    pub fn new(title: String) -> Self {
        Self {
            title,
            is_completed: false,
        }
    }

    pub fn complete(&mut self) {
        self.is_completed = true;
    }

    pub fn reopen(&mut self) {
        self.is_completed = false;
    }

    pub fn toggle(&mut self) {
        self.is_completed = !self.is_completed;
    }
}

/// A kanban task.
///
/// `status` records the column title the task was authored under. It is
/// descriptive only; moving the task between columns leaves it untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh ID and the given title
    pub fn new(title: String) -> Self {
        Self::with_id(TaskId::new(), title)
    }

    pub fn with_id(id: TaskId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            status: None,
            subtasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    /// Sets the description
    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
        self.updated_at = Utc::now();
    }

    pub fn set_status(&mut self, status: String) {
        self.status = Some(status);
        self.updated_at = Utc::now();
    }

    /// Adds a subtask
    pub fn add_subtask(&mut self, title: String) {
        self.subtasks.push(Subtask::new(title));
        self.updated_at = Utc::now();
    }

    /// Toggles the subtask at `index`, returning false if there is none
    pub fn toggle_subtask(&mut self, index: usize) -> bool {
        match self.subtasks.get_mut(index) {
            Some(subtask) => {
                subtask.toggle();
                self.updated_at = Utc::now();
                true
            }
            None => false,
        }
    }

    /// Number of completed subtasks
    pub fn completed_subtasks(&self) -> usize {
        self.subtasks.iter().filter(|s| s.is_completed).count()
    }

    /// Checks if every subtask is completed
    pub fn all_subtasks_completed(&self) -> bool {
        !self.subtasks.is_empty() && self.subtasks.iter().all(|s| s.is_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_uniqueness() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_task_id_parsing() {
        let id = TaskId::new();
        let parsed = TaskId::from_str(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(TaskId::from_str("INVALID").is_err());
        assert!(TaskId::from_str("").is_err());
    }

    #[test]
    fn test_subtask_toggle() {
        let mut subtask = Subtask::new("Write docs".to_string());
        assert!(!subtask.is_completed);

        subtask.toggle();
        assert!(subtask.is_completed);

        subtask.toggle();
        assert!(!subtask.is_completed);

        subtask.complete();
        subtask.reopen();
        assert!(!subtask.is_completed);
    }

    #[test]
    fn test_task_subtask_completion() {
        let mut task = Task::new("Ship release".to_string());

        // No subtasks - never "all completed"
        assert!(!task.all_subtasks_completed());

        task.add_subtask("Tag".to_string());
        task.add_subtask("Publish".to_string());
        assert_eq!(task.completed_subtasks(), 0);

        assert!(task.toggle_subtask(0));
        assert_eq!(task.completed_subtasks(), 1);
        assert!(!task.all_subtasks_completed());

        assert!(task.toggle_subtask(1));
        assert!(task.all_subtasks_completed());

        assert!(!task.toggle_subtask(5));
    }

    #[test]
    fn test_set_title_updates_updated_at() {
        let mut task = Task::new("Test".to_string());
        let initial_updated_at = task.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.set_title("New Title".to_string());

        assert_eq!(task.title, "New Title");
        assert!(task.updated_at > initial_updated_at);
    }

    #[test]
    fn test_set_description_and_status() {
        let mut task = Task::new("Test".to_string());

        task.set_description("Research the onboarding flow".to_string());
        task.set_status("Doing".to_string());

        assert_eq!(task.description.as_deref(), Some("Research the onboarding flow"));
        assert_eq!(task.status.as_deref(), Some("Doing"));

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""status":"Doing""#));
    }

    #[test]
    fn test_task_serialization_uses_camel_case() {
        let mut task = Task::new("Test".to_string());
        task.add_subtask("Step".to_string());

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("isCompleted"));
        assert!(json.contains("createdAt"));

        // Optional fields are omitted when absent
        assert!(!json.contains("description"));
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_task_deserialization_with_missing_fields() {
        let json = r#"{
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "title": "Build UI for onboarding flow",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(
            task.id.to_string(),
            "67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
        assert!(task.description.is_none());
        assert!(task.subtasks.is_empty());
    }
}
