//! kanboard CLI - Kanban task board over a remote document store

use anyhow::Result;
use clap::Parser;
use kanboard::cli::display::{display_board, error};
use kanboard::cli::{Cli, Commands};
use kanboard::{Board, DropEvent, FlagDialog, LogNotifier, RestStore, TaskId};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let store_url = cli
        .store_url
        .clone()
        .or_else(|| std::env::var("KANBOARD_STORE_URL").ok())
        .ok_or_else(|| {
            anyhow::anyhow!("No store URL given. Pass --store-url or set KANBOARD_STORE_URL.")
        })?;
    let store = RestStore::new(store_url, cli.collection.clone());

    match cli.command {
        Commands::Show => {
            let board = Board::new(store, FlagDialog::default(), LogNotifier);
            board.load().await;
            display_board(&board.columns().await);
        }

        Commands::Add {
            title,
            description,
            status,
        } => {
            let dialog = FlagDialog {
                title,
                description,
                status,
                delete: false,
            };
            let board = Board::new(store, dialog, LogNotifier);
            board.create().await;
        }

        Commands::Edit {
            id,
            title,
            description,
            status,
        } => {
            let dialog = FlagDialog {
                title,
                description,
                status,
                delete: false,
            };
            let board = Board::new(store, dialog, LogNotifier);
            board.load().await;

            let task_id = TaskId::assigned(id.clone());
            let Some((column, _)) = board.columns().await.locate(&task_id) else {
                anyhow::bail!("Task not found: {}", id);
            };
            board.edit(column, &task_id).await;
        }

        Commands::Delete { id } => {
            let dialog = FlagDialog {
                delete: true,
                ..Default::default()
            };
            let board = Board::new(store, dialog, LogNotifier);
            board.load().await;

            let task_id = TaskId::assigned(id.clone());
            let Some((column, _)) = board.columns().await.locate(&task_id) else {
                anyhow::bail!("Task not found: {}", id);
            };
            board.edit(column, &task_id).await;
        }

        Commands::Move { id, to, to_index } => {
            let board = Board::new(store, FlagDialog::default(), LogNotifier);
            board.load().await;

            let task_id = TaskId::assigned(id.clone());
            let Some((from, from_index)) = board.columns().await.locate(&task_id) else {
                anyhow::bail!("Task not found: {}", id);
            };
            board
                .move_task(DropEvent {
                    from,
                    to,
                    from_index,
                    to_index,
                })
                .await;
        }
    }

    Ok(())
}
