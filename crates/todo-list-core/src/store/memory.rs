//! In-memory snapshot store (non-persistent).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{PersistenceStore, validate_key};
use crate::error::{PersistError, Result};
use crate::snapshot::Snapshot;

/// Keeps encoded snapshots in a map, so decoding failures behave the same
/// as with the file backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw bytes under `key`, bypassing encoding.
    pub fn put_raw(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), bytes.into());
    }
}

impl PersistenceStore for MemoryStore {
    fn save(&self, snapshot: &Snapshot, key: &str) -> Result<()> {
        validate_key(key)?;
        let bytes = snapshot
            .to_json()
            .map_err(|err| PersistError::io(key, err.into()))?;
        self.put_raw(key, bytes);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Snapshot> {
        validate_key(key)?;
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        let bytes = slots
            .get(key)
            .ok_or_else(|| PersistError::NotFound(key.to_string()))?;
        Snapshot::from_json(bytes).map_err(|err| PersistError::corrupt(key, err))
    }

    fn exists(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.contains_key(key))
    }

    fn delete(&self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| PersistError::NotFound(key.to_string()))
    }

    fn is_persistent(&self) -> bool {
        false
    }
}
