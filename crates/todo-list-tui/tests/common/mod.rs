/*
[INPUT]:  Temporary directories for stores and config files
[OUTPUT]: Shared helpers for session and binary tests
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for todo-list-tui tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use todo_list_core::{DEFAULT_KEY, FileStore};
use todo_list_tui::Session;

/// File-backed session in a fresh temporary directory.
pub fn scratch_session() -> (TempDir, Arc<FileStore>, Session) {
    let dir = TempDir::new().expect("create temp dir");
    let store = Arc::new(FileStore::new(dir.path()));
    let session = Session::new(store.clone(), DEFAULT_KEY);
    (dir, store, session)
}

/// Config file that keeps the binary inside `data_dir` and quiet.
pub fn write_config(dir: &Path, data_dir: &Path) -> PathBuf {
    let path = dir.join("config.yaml");
    let yaml = format!(
        "data_dir: {}\nlog_level: error\nstartup: load\n",
        data_dir.display()
    );
    std::fs::write(&path, yaml).expect("write config");
    path
}
