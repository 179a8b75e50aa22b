/*
[INPUT]:  Live TaskList, a PersistenceStore handle, storage key, startup mode
[OUTPUT]: Load/save flows, dirty tracking and overwrite policy for the shell
[POS]:    Shell-side owner of the list between UI actions and storage
[UPDATE]: When changing startup, save-on-demand or save-on-exit policy
*/

use std::io;
use std::sync::Arc;

use todo_list_core::{PersistError, PersistenceStore, Snapshot, TaskList};
use tracing::{debug, info, warn};

use crate::config::StartupMode;

/// Result of [`Session::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Started with an empty list
    Fresh,
    /// Restored the saved list with this many tasks
    Loaded(usize),
    /// Loading was requested but nothing was saved yet
    Missing,
    /// A saved list exists and the shell must ask whether to load it
    Prompt,
}

/// Owns the live list together with the store it is persisted to.
///
/// `baseline` is the last list known to be stored under `key`; it is `None`
/// when the session started without reading the store.
pub struct Session {
    list: TaskList,
    store: Arc<dyn PersistenceStore>,
    key: String,
    baseline: Option<Snapshot>,
}

impl Session {
    pub fn new(store: Arc<dyn PersistenceStore>, key: impl Into<String>) -> Self {
        Self::with_list(TaskList::new(), store, key)
    }

    pub fn with_list(
        list: TaskList,
        store: Arc<dyn PersistenceStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            list,
            store,
            key: key.into(),
            baseline: None,
        }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TaskList {
        &mut self.list
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_persistent()
    }

    pub fn has_saved_list(&self) -> Result<bool, PersistError> {
        self.store.exists(&self.key)
    }

    /// Applies the startup policy.
    ///
    /// `Load` treats a missing saved list as an empty start. A corrupt list
    /// is returned as an error and the session stays empty.
    pub fn start(&mut self, mode: StartupMode) -> Result<StartOutcome, PersistError> {
        match mode {
            StartupMode::Fresh => {
                self.start_fresh();
                Ok(StartOutcome::Fresh)
            }
            StartupMode::Load => match self.load() {
                Ok(count) => Ok(StartOutcome::Loaded(count)),
                Err(err) if err.is_not_found() => {
                    info!(key = %self.key, "no saved list, starting empty");
                    self.list.clear();
                    self.baseline = Some(Snapshot::default());
                    Ok(StartOutcome::Missing)
                }
                Err(err) => Err(err),
            },
            StartupMode::Ask => {
                if self.has_saved_list()? {
                    Ok(StartOutcome::Prompt)
                } else {
                    self.list.clear();
                    self.baseline = Some(Snapshot::default());
                    Ok(StartOutcome::Fresh)
                }
            }
        }
    }

    pub fn start_fresh(&mut self) {
        info!(key = %self.key, "starting with a new list");
        self.list.clear();
        self.baseline = None;
    }

    /// Replaces the live list with the saved one. Returns the task count.
    pub fn load(&mut self) -> Result<usize, PersistError> {
        let snapshot = self.store.load(&self.key)?;
        self.list.replace_with(&snapshot);
        let count = snapshot.len();
        self.baseline = Some(snapshot);
        info!(key = %self.key, tasks = count, "saved list restored");
        Ok(count)
    }

    /// Saves a copy of the live list. Returns the task count.
    pub fn save(&mut self) -> Result<usize, PersistError> {
        let snapshot = self.list.snapshot();
        self.store.save(&snapshot, &self.key)?;
        Ok(self.record_saved(snapshot))
    }

    /// Like [`Session::save`], but runs the write on a blocking worker.
    ///
    /// The snapshot is taken before the write starts and `&mut self` is held
    /// until it finishes, so the list cannot change underneath it.
    pub async fn save_async(&mut self) -> Result<usize, PersistError> {
        let snapshot = self.list.snapshot();
        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let to_write = snapshot.clone();

        tokio::task::spawn_blocking(move || store.save(&to_write, &key))
            .await
            .map_err(|err| PersistError::Io {
                key: self.key.clone(),
                source: io::Error::other(err),
            })??;
        Ok(self.record_saved(snapshot))
    }

    /// Whether the live list differs from what is stored.
    pub fn is_dirty(&self) -> bool {
        match &self.baseline {
            Some(saved) => !self.list.matches(saved),
            None => !self.list.is_empty(),
        }
    }

    /// Whether saving now would replace a different, non-empty stored list.
    pub fn needs_overwrite_confirmation(&self) -> bool {
        match &self.baseline {
            Some(saved) => !saved.is_empty() && !self.list.matches(saved),
            None => match self.store.exists(&self.key) {
                Ok(exists) => exists,
                Err(err) => {
                    warn!(key = %self.key, error = %err, "could not check for a saved list");
                    true
                }
            },
        }
    }

    fn record_saved(&mut self, snapshot: Snapshot) -> usize {
        let count = snapshot.len();
        debug!(key = %self.key, tasks = count, "session baseline updated");
        self.baseline = Some(snapshot);
        info!(key = %self.key, tasks = count, "list saved");
        count
    }
}
