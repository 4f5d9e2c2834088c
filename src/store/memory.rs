//! In-process task store
//!
//! Backs controller tests and offline demo runs. Documents are kept in
//! insertion order and identifiers are assigned sequentially (`t1`, `t2`, ...).
//! Reads and writes can be switched to fail to exercise error paths.

use crate::models::Task;
use crate::store::{StoreError, TaskPatch, TaskStore};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::Mutex;

/// In-memory document collection
pub struct MemoryStore {
    docs: Mutex<Vec<Task>>,
    next_id: AtomicU64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            docs: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Create a store pre-populated with the given tasks. Sequential id
    /// assignment continues past the seeded count.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next = tasks.len() as u64 + 1;
        MemoryStore {
            docs: Mutex::new(tasks),
            next_id: AtomicU64::new(next),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent fetches fail with a connectivity error.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent creates, updates, and deletes fail with a
    /// connectivity error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored tasks, in insertion order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.docs.lock().await.clone()
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Connectivity("injected read failure".into()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Connectivity("injected write failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        self.check_read()?;
        Ok(self.docs.lock().await.clone())
    }

    async fn create(&self, task: &Task) -> Result<String, StoreError> {
        self.check_write()?;
        let id = format!("t{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut stored = task.clone();
        stored.confirm_id(id.clone());
        self.docs.lock().await.push(stored);
        Ok(id)
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        self.check_write()?;
        let mut docs = self.docs.lock().await;
        let task = docs
            .iter_mut()
            .find(|t| t.id.as_assigned() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated = patch.updated;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_write()?;
        let mut docs = self.docs.lock().await;
        let index = docs
            .iter()
            .position(|t| t.id.as_assigned() == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        docs.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let id1 = store.create(&Task::draft()).await.unwrap();
        let id2 = store.create(&Task::draft()).await.unwrap();

        assert_eq!(id1, "t1");
        assert_eq!(id2, "t2");

        let tasks = store.fetch_all().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id.as_assigned(), Some("t1"));
    }

    #[tokio::test]
    async fn test_update_applies_partial_fields() {
        let store = MemoryStore::new();
        let mut draft = Task::draft();
        draft.title = "Original".to_string();
        draft.description = "Body".to_string();
        let id = store.create(&draft).await.unwrap();

        let patch = TaskPatch {
            title: Some("Renamed".to_string()),
            description: None,
            status: Some(Status::Done),
            updated: chrono::Utc::now(),
        };
        store.update(&id, &patch).await.unwrap();

        let tasks = store.tasks().await;
        assert_eq!(tasks[0].title, "Renamed");
        assert_eq!(tasks[0].description, "Body");
        assert_eq!(tasks[0].status, Status::Done);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = MemoryStore::new();
        let err = store
            .update("missing", &TaskPatch::status(Status::Done))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_one() {
        let store = MemoryStore::new();
        let id1 = store.create(&Task::draft()).await.unwrap();
        let id2 = store.create(&Task::draft()).await.unwrap();

        store.delete(&id1).await.unwrap();

        let tasks = store.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id.as_assigned(), Some(id2.as_str()));

        assert!(matches!(
            store.delete(&id1).await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = MemoryStore::new();
        store.create(&Task::draft()).await.unwrap();

        store.fail_reads(true);
        assert!(matches!(
            store.fetch_all().await.unwrap_err(),
            StoreError::Connectivity(_)
        ));
        store.fail_reads(false);
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);

        store.fail_writes(true);
        assert!(store.create(&Task::draft()).await.is_err());
        assert!(store.update("t1", &TaskPatch::status(Status::Done)).await.is_err());
        assert!(store.delete("t1").await.is_err());
        // failed writes must not mutate
        store.fail_writes(false);
        let tasks = store.tasks().await;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, Status::Todo);
    }
}
