//! Edit dialog contract
//!
//! The board hands the dialog a clone of the task, so edits made inside the
//! dialog cannot reach the board's copy before the user confirms.

use crate::models::{Status, Task};
use async_trait::async_trait;

/// Outcome of a confirmed dialog: the edited task and whether the user asked
/// for deletion instead.
#[derive(Debug, Clone)]
pub struct DialogResult {
    pub task: Task,
    pub delete: bool,
}

/// Modal surface for creating and editing tasks. Resolves with `None` when
/// the user cancels.
#[async_trait]
pub trait EditDialog: Send + Sync {
    async fn open(&self, initial: Task, allow_delete: bool) -> Option<DialogResult>;
}

/// Non-interactive dialog fed from command-line flags. Unset fields keep the
/// initial task's values; `delete` turns the resolution into a delete request.
#[derive(Debug, Default, Clone)]
pub struct FlagDialog {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub delete: bool,
}

#[async_trait]
impl EditDialog for FlagDialog {
    async fn open(&self, initial: Task, allow_delete: bool) -> Option<DialogResult> {
        let mut task = initial;
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }

        Some(DialogResult {
            task,
            delete: self.delete && allow_delete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flag_dialog_merges_overrides() {
        let dialog = FlagDialog {
            title: Some("Renamed".to_string()),
            status: Some(Status::Done),
            ..Default::default()
        };

        let mut initial = Task::new("t1", "Original", Status::Todo);
        initial.description = "keep me".to_string();

        let result = dialog.open(initial, true).await.unwrap();
        assert_eq!(result.task.title, "Renamed");
        assert_eq!(result.task.description, "keep me");
        assert_eq!(result.task.status, Status::Done);
        assert!(!result.delete);
    }

    #[tokio::test]
    async fn test_flag_dialog_delete_respects_allow_flag() {
        let dialog = FlagDialog {
            delete: true,
            ..Default::default()
        };

        let result = dialog
            .open(Task::new("t1", "X", Status::Todo), false)
            .await
            .unwrap();
        assert!(!result.delete);

        let result = dialog
            .open(Task::new("t1", "X", Status::Todo), true)
            .await
            .unwrap();
        assert!(result.delete);
    }
}
