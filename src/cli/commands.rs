//! CLI command definitions using clap

use crate::models::Status;
use clap::{Parser, Subcommand};

/// Kanban task board backed by a remote document store
#[derive(Parser, Debug)]
#[command(name = "kanboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the task store (defaults to KANBOARD_STORE_URL)
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    /// Document collection holding the tasks
    #[arg(long, global = true, default_value = "tasks")]
    pub collection: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board
    Show,

    /// Add a new task
    Add {
        /// Task title
        #[arg(short, long)]
        title: Option<String>,

        /// Task description
        #[arg(short, long)]
        description: Option<String>,

        /// Starting column (todo, inProgress, done)
        #[arg(short, long, value_parser = parse_status)]
        status: Option<Status>,
    },

    /// Edit a task's fields
    Edit {
        /// Task ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New column (todo, inProgress, done)
        #[arg(short, long, value_parser = parse_status)]
        status: Option<Status>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Move a task to another column
    Move {
        /// Task ID
        id: String,

        /// Destination column (todo, inProgress, done)
        #[arg(value_parser = parse_status)]
        to: Status,

        /// Position within the destination column
        #[arg(long, default_value_t = 0)]
        to_index: usize,
    },
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse()
}
