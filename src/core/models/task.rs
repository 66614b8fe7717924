use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub column_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(column_id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            column_id: column_id.into(),
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    /// Same as `new` but with a caller-chosen identifier.
    pub fn with_id(id: impl Into<String>, column_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::new(column_id, title, "")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_gets_a_fresh_id() {
        let a = Task::new("todo", "Write docs", "");
        let b = Task::new("todo", "Write docs", "");
        assert_ne!(a.id, b.id);
        assert_eq!(a.column_id, "todo");
    }

    #[test]
    fn description_defaults_when_missing() {
        let json = r#"{"id":"t1","column_id":"todo","title":"A","created_at":"2024-01-01T00:00:00Z"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.id, "t1");
    }
}
