/*
[INPUT]:  Optional YAML config file, TODO_LIST_* environment variables
[OUTPUT]: Resolved application configuration
[POS]:    Configuration layer - storage location, startup policy, logging
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use todo_list_core::DEFAULT_KEY;

/// Environment variable prefix, e.g. `TODO_LIST_KEY=work`.
pub const ENV_PREFIX: &str = "TODO_LIST";

/// How the session decides whether to restore the saved list at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    /// Ask the user when a saved list exists
    #[default]
    Ask,
    /// Always restore the saved list
    Load,
    /// Always start with an empty list
    Fresh,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding saved lists
    pub data_dir: PathBuf,
    /// Storage key of the list to work on
    pub key: String,
    pub startup: StartupMode,
    /// Prompt to save unsaved changes when quitting the TUI
    pub confirm_on_exit: bool,
    /// tracing filter directive, e.g. "info" or "todo_list_core=debug"
    pub log_level: String,
    /// Optional file receiving a copy of the log
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: DEFAULT_KEY.to_string(),
            startup: StartupMode::default(),
            confirm_on_exit: true,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("todo-list"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl AppConfig {
    /// Config file looked up when `--config` is not given.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("todo-list").join("config.yaml"))
    }

    /// Load configuration: defaults, then the file, then environment.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(default_path) = Self::default_path() {
                    builder =
                        builder.add_source(config::File::from(default_path).required(false));
                }
            }
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));

        let config = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize::<Self>()
            .context("parse configuration")?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize configuration")
    }
}
