//! Core types for the todo store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a todo.
///
/// IDs are assigned by the store, monotonically, and are never reused
/// within a store's lifetime even after the todo is deleted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TodoId(pub u64);

impl fmt::Debug for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TodoId({})", self.0)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record.
///
/// Serializes to `{ "id": n, "text": s, "complete": b }`, the layout of the
/// persisted storage slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier (assigned by store).
    pub id: TodoId,

    /// The task description.
    pub text: String,

    /// Whether the task is done.
    pub complete: bool,
}

impl Todo {
    /// Create a new, incomplete todo.
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_serde_layout() {
        let todo = Todo::new(TodoId(3), "Plant a garden");
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 3, "text": "Plant a garden", "complete": false })
        );
    }

    #[test]
    fn test_todo_roundtrip() {
        let todo = Todo {
            id: TodoId(42),
            text: "Run a marathon".to_string(),
            complete: true,
        };
        let bytes = serde_json::to_vec(&todo).unwrap();
        let parsed: Todo = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, todo);
    }
}
