//! kanboard - Kanban task board backed by a remote document store
//!
//! This library provides the board controller that holds the three task
//! columns (todo / inProgress / done), loads them from a task store, and
//! orchestrates create, edit, delete, and move operations, reporting
//! outcomes through a notifier. The store, edit dialog, and notifier are
//! trait seams with REST, flag-driven, and log-backed implementations.

pub mod board;
pub mod cli;
pub mod dialog;
pub mod models;
pub mod notify;
pub mod store;

pub use board::{Board, Columns, DropEvent, OpGate};
pub use dialog::{DialogResult, EditDialog, FlagDialog};
pub use models::{Status, Task, TaskId};
pub use notify::{LogNotifier, NoticeKind, Notifier};
pub use store::{MemoryStore, RestStore, StoreError, TaskPatch, TaskStore};
