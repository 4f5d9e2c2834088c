//! Display formatting for CLI output

use crate::board::Columns;
use crate::models::Status;
use tabled::{Table, Tabled, settings::Style};

/// Task row for table display
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Column")]
    column: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Display the board as a table, column by column
pub fn display_board(columns: &Columns) {
    if columns.is_empty() {
        log::info!("The board is empty.");
        return;
    }

    let mut rows = Vec::new();
    for status in Status::ALL {
        for task in columns.column(status) {
            rows.push(TaskRow {
                column: status.to_string(),
                id: task.id.to_string(),
                title: truncate(&task.title, 40),
                description: truncate(&task.description, 50),
            });
        }
    }

    let table = Table::new(rows).with(Style::rounded()).to_string();

    println!("{}", table);
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max - 3])
    }
}

/// Format for error messages
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}
