/*
[INPUT]:  CLI arguments, resolved configuration, session over the store
[OUTPUT]: Config overrides and one-shot list commands (show/add/remove/clear)
[POS]:    CLI flow
[UPDATE]: 2026-10-15 Add one-shot subcommands next to the TUI
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use dialoguer::{Confirm, theme::ColorfulTheme};
use todo_list_tui::{AppConfig, Session, StartOutcome, StartupMode};

#[derive(Parser, Debug)]
#[command(name = "todo-list", version, about = "Ordered to-do list in the terminal")]
pub struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    /// Directory holding saved lists
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
    /// Name of the saved list
    #[arg(long = "key", value_name = "KEY", global = true)]
    pub key: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
    /// Keep the list in memory only; nothing is written to disk
    #[arg(long = "ephemeral", global = true)]
    pub ephemeral: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive list (default)
    Tui {
        /// Load the saved list without asking
        #[arg(long, conflicts_with = "fresh")]
        load: bool,
        /// Start with an empty list without asking
        #[arg(long)]
        fresh: bool,
    },
    /// Print the saved list
    Show,
    /// Append tasks to the saved list
    Add {
        #[arg(required = true, value_name = "TEXT")]
        texts: Vec<String>,
    },
    /// Remove the first task with this exact text
    Remove {
        #[arg(value_name = "TEXT")]
        text: String,
    },
    /// Empty the saved list
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Print the effective configuration as YAML
    Config,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui {
            load: false,
            fresh: false,
        })
    }

    /// Flags win over file and environment settings.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(key) = &self.key {
            config.key = key.clone();
        }
        if let Some(log_level) = &self.log_level {
            config.log_level = log_level.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        match self.command {
            Some(Command::Tui { load: true, .. }) => config.startup = StartupMode::Load,
            Some(Command::Tui { fresh: true, .. }) => config.startup = StartupMode::Fresh,
            _ => {}
        }
    }
}

fn open_saved(session: &mut Session) -> Result<StartOutcome> {
    session
        .start(StartupMode::Load)
        .with_context(|| format!("load saved list '{}'", session.key()))
}

fn save(session: &mut Session) -> Result<()> {
    let count = session
        .save()
        .with_context(|| format!("save list '{}'", session.key()))?;
    println!("{} {count} tasks", style("saved").green());
    Ok(())
}

pub fn show(session: &mut Session) -> Result<()> {
    if open_saved(session)? == StartOutcome::Missing {
        println!("no saved list '{}'", session.key());
        return Ok(());
    }

    let list = session.list();
    println!(
        "{}",
        style(format!("{} ({} tasks)", session.key(), list.len())).bold().cyan()
    );
    for (index, task) in list.iter().enumerate() {
        println!("{:>3}. {}", index + 1, task.text());
    }
    Ok(())
}

pub fn add(session: &mut Session, texts: Vec<String>) -> Result<()> {
    open_saved(session)?;
    for text in texts {
        session.list_mut().add(text);
    }
    save(session)
}

pub fn remove(session: &mut Session, text: &str) -> Result<()> {
    open_saved(session)?;
    if session.list_mut().remove(text).is_none() {
        println!("no task matching {text:?}");
        return Ok(());
    }
    save(session)
}

pub fn clear(session: &mut Session, yes: bool) -> Result<()> {
    open_saved(session)?;
    if session.list().is_empty() {
        println!("list '{}' is already empty", session.key());
        return Ok(());
    }
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Remove all {} tasks from '{}'?",
                session.list().len(),
                session.key()
            ))
            .default(false)
            .interact()
            .context("read confirmation")?;
        if !confirmed {
            println!("cancelled");
            return Ok(());
        }
    }
    session.list_mut().clear();
    save(session)
}

pub fn print_config(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
