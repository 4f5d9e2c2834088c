//! The three in-memory task columns
//!
//! Columns are selected by the closed [`Status`] enumeration, never by name,
//! so column handling is exhaustiveness-checked. Content is only ever
//! replaced wholesale from a store fetch.

use crate::models::{Status, Task, TaskId};

/// Ordered task lists for the three board columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl Columns {
    pub fn new() -> Self {
        Columns::default()
    }

    /// Partition fetched tasks into columns by status, preserving fetch
    /// order within each column.
    pub fn partition(tasks: Vec<Task>) -> Self {
        let mut columns = Columns::new();
        for task in tasks {
            columns.column_mut(task.status).push(task);
        }
        columns
    }

    pub fn column(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: Status) -> &mut Vec<Task> {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }

    /// Find a task by identifier within one column.
    pub fn find(&self, status: Status, id: &TaskId) -> Option<&Task> {
        self.column(status).iter().find(|t| &t.id == id)
    }

    /// Locate a task anywhere on the board, returning its column and index.
    pub fn locate(&self, id: &TaskId) -> Option<(Status, usize)> {
        for status in Status::ALL {
            if let Some(index) = self.column(status).iter().position(|t| &t.id == id) {
                return Some((status, index));
            }
        }
        None
    }

    pub fn total(&self) -> usize {
        Status::ALL.iter().map(|s| self.column(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
