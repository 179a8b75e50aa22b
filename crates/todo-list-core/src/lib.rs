/*
[INPUT]:  Public API exports for todo-list-core crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

//! Ordered task list and snapshot persistence.
//!
//! The crate has two halves: [`TaskList`], the live reorderable list the
//! shell mutates, and [`PersistenceStore`], which saves and restores a
//! [`Snapshot`] of it under a key.

pub mod error;
pub mod list;
pub mod snapshot;
pub mod store;
pub mod task;

pub use error::{PersistError, Result};
pub use list::TaskList;
pub use snapshot::Snapshot;
pub use store::{DEFAULT_KEY, FileStore, MemoryStore, PersistenceStore};
pub use task::{Task, TaskId, TaskKey};
