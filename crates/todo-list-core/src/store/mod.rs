/*
[INPUT]:  Snapshots to persist, storage keys
[OUTPUT]: PersistenceStore trait, key validation, backend re-exports
[POS]:    Storage layer root
[UPDATE]: When adding a storage backend or changing the store contract
*/

//! Snapshot storage with pluggable backends.
//!
//! - `file`: one JSON file per key under a directory
//! - `memory`: in-process map, non-persistent

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::{PersistError, Result};
use crate::snapshot::Snapshot;

/// Key used when the shell does not pick one.
pub const DEFAULT_KEY: &str = "ToDoList";

/// Durable save/restore of one snapshot per key.
///
/// `save` replaces whatever was stored under the key. Implementations must
/// not interleave two operations on the same key.
pub trait PersistenceStore: Send + Sync {
    fn save(&self, snapshot: &Snapshot, key: &str) -> Result<()>;

    fn load(&self, key: &str) -> Result<Snapshot>;

    fn exists(&self, key: &str) -> Result<bool>;

    /// Removes the stored value. Deleting an absent key is `NotFound`.
    fn delete(&self, key: &str) -> Result<()>;

    fn is_persistent(&self) -> bool {
        true
    }
}

/// Rejects keys that cannot name a single storage slot.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = key.is_empty()
        || key == "."
        || key == ".."
        || key.contains(['/', '\\', '\0']);
    if invalid {
        return Err(PersistError::InvalidKey(key.to_string()));
    }
    Ok(())
}
