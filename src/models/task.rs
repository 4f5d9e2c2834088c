//! Task model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Column a task belongs to. The serialized names are the store's wire names
/// and double as the drag-surface container identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in board order, for exhaustive column iteration.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Todo => write!(f, "todo"),
            Status::InProgress => write!(f, "inProgress"),
            Status::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "inprogress" | "in-progress" | "in_progress" | "doing" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(format!("Unknown status: {}", s)),
        }
    }
}

/// Task identity. A task drafted on the client carries a generated placeholder
/// until the store confirms it with its own identifier; confirmation is an
/// explicit transition rather than a field overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskId {
    Pending(Uuid),
    Assigned(String),
}

impl TaskId {
    /// Generate a fresh client-side placeholder identity.
    pub fn pending() -> Self {
        TaskId::Pending(Uuid::new_v4())
    }

    pub fn assigned(id: impl Into<String>) -> Self {
        TaskId::Assigned(id.into())
    }

    /// The store-assigned identifier, if confirmed.
    pub fn as_assigned(&self) -> Option<&str> {
        match self {
            TaskId::Pending(_) => None,
            TaskId::Assigned(id) => Some(id),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TaskId::Pending(_))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Pending(uuid) => write!(f, "pending:{}", uuid),
            TaskId::Assigned(id) => write!(f, "{}", id),
        }
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Task {
    /// Create a confirmed task, as reconstructed from a store document.
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: Status) -> Self {
        let now = Utc::now();
        Task {
            id: TaskId::assigned(id),
            title: title.into(),
            description: String::new(),
            status,
            created: now,
            updated: now,
        }
    }

    /// Create a fresh draft with a pending identity, as handed to the
    /// new-task dialog.
    pub fn draft() -> Self {
        let now = Utc::now();
        Task {
            id: TaskId::pending(),
            title: String::new(),
            description: String::new(),
            status: Status::Todo,
            created: now,
            updated: now,
        }
    }

    /// Confirm this task's identity with the store-assigned id.
    pub fn confirm_id(&mut self, id: impl Into<String>) {
        self.id = TaskId::assigned(id);
    }

    /// A draft is empty when both title and description are blank; submitting
    /// one counts as an implicit cancellation.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }

    /// Update the task's updated timestamp
    pub fn touch(&mut self) {
        self.updated = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Todo.to_string(), "todo");
        assert_eq!(Status::InProgress.to_string(), "inProgress");
        assert_eq!(Status::Done.to_string(), "done");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("todo".parse::<Status>().unwrap(), Status::Todo);
        assert_eq!("inProgress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("in-progress".parse::<Status>().unwrap(), Status::InProgress);
        assert_eq!("done".parse::<Status>().unwrap(), Status::Done);
        assert!("invalid".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"inProgress\""
        );
        assert_eq!(
            serde_json::from_str::<Status>("\"todo\"").unwrap(),
            Status::Todo
        );
    }

    #[test]
    fn test_draft_starts_pending_and_empty() {
        let draft = Task::draft();
        assert!(draft.id.is_pending());
        assert!(draft.is_empty());
        assert_eq!(draft.status, Status::Todo);
    }

    #[test]
    fn test_confirm_id() {
        let mut task = Task::draft();
        task.confirm_id("t7");
        assert!(!task.id.is_pending());
        assert_eq!(task.id.as_assigned(), Some("t7"));
        assert_eq!(task.id, TaskId::assigned("t7"));
    }

    #[test]
    fn test_distinct_pending_ids() {
        assert_ne!(TaskId::pending(), TaskId::pending());
    }

    #[test]
    fn test_is_empty() {
        let mut task = Task::draft();
        assert!(task.is_empty());
        task.description = "details".to_string();
        assert!(!task.is_empty());
        task.description.clear();
        task.title = "X".to_string();
        assert!(!task.is_empty());
    }
}
