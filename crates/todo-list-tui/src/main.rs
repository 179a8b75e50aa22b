/*
[INPUT]:  CLI arguments, YAML configuration file, TODO_LIST_* environment
[OUTPUT]: Interactive TUI session or a one-shot list command
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or log routing
*/

mod cli;
mod logging;
mod tui;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use todo_list_core::{FileStore, MemoryStore, PersistenceStore};
use todo_list_tui::{AppConfig, Session};
use tracing::info;

use crate::cli::{Cli, Command};
use crate::logging::{LOG_BUFFER_CAPACITY, LogBuffer, LogTarget, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let mut config = AppConfig::load(args.config_path.as_deref()).context("load config")?;
    args.apply_overrides(&mut config);
    let command = args.command();

    let log_buffer = LogBuffer::handle(LOG_BUFFER_CAPACITY);
    let target = match command {
        Command::Tui { .. } => LogTarget::Buffer(log_buffer.clone()),
        _ => LogTarget::Stderr,
    };
    let _log_guard = init_tracing(&config.log_level, config.log_file.as_deref(), target)?;

    info!(
        data_dir = %config.data_dir.display(),
        key = %config.key,
        ephemeral = args.ephemeral,
        "starting todo-list"
    );

    let store: Arc<dyn PersistenceStore> = if args.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::new(&config.data_dir))
    };
    let mut session = Session::new(store, config.key.clone());

    match command {
        Command::Tui { .. } => {
            tui::run_tui(session, log_buffer, config.startup, config.confirm_on_exit)
                .await
                .context("run tui")?;
        }
        Command::Show => cli::show(&mut session)?,
        Command::Add { texts } => cli::add(&mut session, texts)?,
        Command::Remove { text } => cli::remove(&mut session, &text)?,
        Command::Clear { yes } => cli::clear(&mut session, yes)?,
        Command::Config => cli::print_config(&config)?,
    }

    Ok(())
}
