//! Task store contract and implementations

pub mod memory;
pub mod rest;

use crate::models::{Status, Task};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

pub use memory::MemoryStore;
pub use rest::RestStore;

/// Errors surfaced by task store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Store rejected the request: {0}")]
    Rejected(String),
    #[error("Connection failed: {0}")]
    Connectivity(String),
}

/// Partial-field update for a stored task. Absent fields are left untouched
/// by the store.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    pub updated: DateTime<Utc>,
}

impl TaskPatch {
    /// A patch that only moves the task to another status.
    pub fn status(status: Status) -> Self {
        TaskPatch {
            title: None,
            description: None,
            status: Some(status),
            updated: Utc::now(),
        }
    }

    /// A patch carrying the full editable field set of a task.
    pub fn from_task(task: &Task) -> Self {
        TaskPatch {
            title: Some(task.title.clone()),
            description: Some(task.description.clone()),
            status: Some(task.status),
            updated: Utc::now(),
        }
    }
}

/// Remote document collection holding tasks, keyed by an opaque identifier
/// assigned on creation.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Fetch every task in the collection.
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError>;

    /// Create a task and return the store-assigned identifier. Any pending
    /// identity on the task is ignored by the store.
    async fn create(&self, task: &Task) -> Result<String, StoreError>;

    /// Apply a partial update to the task with the given identifier.
    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError>;

    /// Delete the task with the given identifier.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: TaskStore + ?Sized> TaskStore for std::sync::Arc<S> {
    async fn fetch_all(&self) -> Result<Vec<Task>, StoreError> {
        (**self).fetch_all().await
    }

    async fn create(&self, task: &Task) -> Result<String, StoreError> {
        (**self).create(task).await
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<(), StoreError> {
        (**self).update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}
