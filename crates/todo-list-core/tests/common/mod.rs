/*
[INPUT]:  Test fixtures for list and store tests
[OUTPUT]: Shared helpers for building lists and scratch stores
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for todo-list-core tests

use tempfile::TempDir;
use todo_list_core::{FileStore, Snapshot, TaskList};

/// Build a list from literal texts
pub fn list_of(items: &[&str]) -> TaskList {
    items.iter().copied().collect()
}

/// Build a snapshot from literal texts
pub fn snapshot_of(items: &[&str]) -> Snapshot {
    items.iter().copied().collect()
}

/// File store rooted in a fresh temporary directory.
///
/// The directory lives as long as the returned `TempDir`.
#[allow(dead_code)]
pub fn scratch_store() -> (TempDir, FileStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = FileStore::new(dir.path());
    (dir, store)
}
