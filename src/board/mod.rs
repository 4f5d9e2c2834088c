//! Board controller
//!
//! Holds the three task columns and orchestrates load, create, edit, delete,
//! and move against the task store. The store is the source of truth: every
//! successful write is followed by an authoritative reload, and a failed
//! write leaves the in-memory columns untouched. Store failures never
//! propagate out of an operation; they are reported through the notifier.

pub mod columns;
pub mod gate;

pub use columns::Columns;
pub use gate::OpGate;

use crate::dialog::EditDialog;
use crate::models::{Status, Task, TaskId};
use crate::notify::{NoticeKind, Notifier};
use crate::store::{TaskPatch, TaskStore};
use tokio::sync::Mutex;

/// Drop reported by the drag surface. `to_index` is accepted per the drag
/// contract, but final ordering follows store fetch order once the board
/// reconciles.
#[derive(Debug, Clone, Copy)]
pub struct DropEvent {
    pub from: Status,
    pub to: Status,
    pub from_index: usize,
    pub to_index: usize,
}

/// The kanban board: three in-memory columns plus the collaborators that
/// load and persist them.
pub struct Board<S, D, N> {
    store: S,
    dialog: D,
    notifier: N,
    columns: Mutex<Columns>,
    gate: OpGate,
}

impl<S: TaskStore, D: EditDialog, N: Notifier> Board<S, D, N> {
    pub fn new(store: S, dialog: D, notifier: N) -> Self {
        Board {
            store,
            dialog,
            notifier,
            columns: Mutex::new(Columns::new()),
            gate: OpGate::new(),
        }
    }

    /// Snapshot of the current columns.
    pub async fn columns(&self) -> Columns {
        self.columns.lock().await.clone()
    }

    /// Fetch every task from the store and rebuild the columns wholesale.
    /// On failure the previous columns are kept.
    pub async fn load(&self) {
        match self.store.fetch_all().await {
            Ok(tasks) => {
                log::debug!("Fetched {} tasks", tasks.len());
                *self.columns.lock().await = Columns::partition(tasks);
                self.info("Tasks fetched successfully.");
            }
            Err(e) => {
                self.error(&format!("Error fetching tasks: {}", e));
            }
        }
    }

    /// Open the dialog with a fresh draft and create the confirmed result.
    /// A cancelled dialog, or a submission with both title and description
    /// empty, leaves the board and the store untouched.
    pub async fn create(&self) {
        let draft = Task::draft();
        let Some(result) = self.dialog.open(draft, true).await else {
            return;
        };

        if result.task.is_empty() {
            log::debug!("Task creation abandoned: empty draft");
            return;
        }

        let mut task = result.task;
        task.touch();
        match self.store.create(&task).await {
            Ok(id) => {
                task.confirm_id(id);
                log::debug!("Draft confirmed as task {}", task.id);
                self.load().await;
                self.info("New task added successfully.");
            }
            Err(e) => {
                self.error(&format!("Error adding new task: {}", e));
            }
        }
    }

    /// Open the dialog for a task currently shown in `column` and apply the
    /// outcome: an update of its fields (possibly moving it to another
    /// column) or its deletion.
    pub async fn edit(&self, column: Status, id: &TaskId) {
        let snapshot = self.columns.lock().await.find(column, id).cloned();
        let Some(task) = snapshot else {
            self.error(&format!("Task {} is not in the {} column.", id, column));
            return;
        };
        let Some(key) = task.id.as_assigned().map(str::to_string) else {
            self.error(&format!("Task {} has no store identity.", id));
            return;
        };

        let Some(_permit) = self.gate.try_acquire(&key) else {
            self.busy(&key);
            return;
        };

        let Some(result) = self.dialog.open(task.clone(), true).await else {
            return;
        };

        if result.delete {
            match self.store.delete(&key).await {
                Ok(()) => {
                    self.load().await;
                    self.info("Task deleted successfully.");
                }
                Err(e) => {
                    self.error(&format!("Error deleting task: {}", e));
                }
            }
        } else {
            let mut edited = result.task;
            edited.touch();
            match self.store.update(&key, &TaskPatch::from_task(&edited)).await {
                Ok(()) => {
                    self.load().await;
                    self.info("Task updated successfully.");
                }
                Err(e) => {
                    self.error(&format!("Error updating task: {}", e));
                }
            }
        }
    }

    /// Handle a drop from the drag surface. A drop within the same column is
    /// a no-op; a cross-column drop persists the new status and reconciles.
    pub async fn move_task(&self, event: DropEvent) {
        if event.from == event.to {
            return;
        }

        let task = self
            .columns
            .lock()
            .await
            .column(event.from)
            .get(event.from_index)
            .cloned();
        let Some(task) = task else {
            self.error(&format!(
                "No task at position {} of the {} column.",
                event.from_index, event.from
            ));
            return;
        };
        let Some(key) = task.id.as_assigned().map(str::to_string) else {
            self.error(&format!("Task {} has no store identity.", task.id));
            return;
        };

        let Some(_permit) = self.gate.try_acquire(&key) else {
            self.busy(&key);
            return;
        };

        match self.store.update(&key, &TaskPatch::status(event.to)).await {
            Ok(()) => {
                self.load().await;
                self.info("Task status updated successfully.");
            }
            Err(e) => {
                self.error(&format!("Error updating task status: {}", e));
            }
        }
    }

    fn info(&self, message: &str) {
        self.notifier.notify(NoticeKind::Info, message);
    }

    fn error(&self, message: &str) {
        self.notifier.notify(NoticeKind::Error, message);
    }

    fn busy(&self, id: &str) {
        self.error(&format!(
            "Task {} already has an operation in progress.",
            id
        ));
    }
}
