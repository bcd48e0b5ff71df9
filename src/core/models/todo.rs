//! Todo record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier assigned by the store
    pub id: i64,
    /// Title, stored as given
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /todos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

/// Body of `PUT /todos/{id}`
///
/// The update replaces both fields; an omitted `completed` resets it to false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Field values written by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

impl From<UpdateTodoRequest> for UpdateTodo {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            title: request.title,
            completed: request.completed,
        }
    }
}

/// Confirmation body for update and delete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_requires_title() {
        assert!(serde_json::from_str::<CreateTodoRequest>("{}").is_err());

        let request: CreateTodoRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert_eq!(request.title, "");
    }

    #[test]
    fn test_update_request_defaults_completed() {
        let request: UpdateTodoRequest = serde_json::from_str(r#"{"title": "milk"}"#).unwrap();
        let update = UpdateTodo::from(request);
        assert_eq!(update.title, "milk");
        assert!(!update.completed);
    }

    #[test]
    fn test_todo_serialization() {
        let todo = Todo {
            id: 3,
            title: "write report".to_string(),
            completed: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "write report");
        assert_eq!(json["completed"], false);
        assert!(json["created_at"].is_string());
    }
}
