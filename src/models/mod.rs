//! Data models for kanboard

pub mod task;

pub use task::{Status, Task, TaskId};
