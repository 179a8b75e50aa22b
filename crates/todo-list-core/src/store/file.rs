/*
[INPUT]:  Snapshots and keys, a data directory on disk
[OUTPUT]: JSON files written atomically, snapshots read back
[POS]:    Storage layer - file backend
[UPDATE]: When changing the on-disk layout or write strategy
*/

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::{PersistenceStore, validate_key};
use crate::error::{PersistError, Result};
use crate::snapshot::Snapshot;

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    io_lock: Mutex<()>,
}

impl FileStore {
    pub const EXTENSION: &'static str = "json";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            io_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{}", Self::EXTENSION)))
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.io_lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // Atomic write: temp file in the same directory, then rename over the target
    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(bytes)?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

impl PersistenceStore for FileStore {
    fn save(&self, snapshot: &Snapshot, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let bytes = snapshot
            .to_json()
            .map_err(|err| PersistError::io(key, err.into()))?;

        let _guard = self.lock();
        self.write_atomic(&path, &bytes)
            .map_err(|err| PersistError::io(key, err))?;
        debug!(key, path = %path.display(), items = snapshot.len(), "list saved");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Snapshot> {
        let path = self.path_for(key)?;

        let _guard = self.lock();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(PersistError::NotFound(key.to_string()));
            }
            Err(err) => return Err(PersistError::io(key, err)),
        };

        let snapshot = Snapshot::from_json(&bytes).map_err(|err| {
            warn!(key, path = %path.display(), error = %err, "saved list is corrupt");
            PersistError::corrupt(key, err)
        })?;
        debug!(key, path = %path.display(), items = snapshot.len(), "list loaded");
        Ok(snapshot)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        let _guard = self.lock();
        path.try_exists().map_err(|err| PersistError::io(key, err))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _guard = self.lock();
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, path = %path.display(), "saved list deleted");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(PersistError::NotFound(key.to_string()))
            }
            Err(err) => Err(PersistError::io(key, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_for_key() {
        let store = FileStore::new("/var/lib/todo");
        assert_eq!(
            store.path_for("ToDoList").unwrap(),
            PathBuf::from("/var/lib/todo/ToDoList.json")
        );
        assert!(store.path_for("../escape").is_err());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let tmp_dir = TempDir::new().unwrap();
        let store = FileStore::new(tmp_dir.path().join("nested").join("data"));
        let snapshot: Snapshot = ["a"].into_iter().collect();

        store.save(&snapshot, "ToDoList").unwrap();
        assert!(store.exists("ToDoList").unwrap());
        assert_eq!(store.load("ToDoList").unwrap(), snapshot);
    }

    #[test]
    fn test_failed_save_leaves_no_temp_files() {
        let tmp_dir = TempDir::new().unwrap();
        let store = FileStore::new(tmp_dir.path());
        // A directory at the target path makes the final rename fail
        fs::create_dir(tmp_dir.path().join("blocked.json")).unwrap();

        let err = store
            .save(&Snapshot::from(vec!["x".to_string()]), "blocked")
            .unwrap_err();
        assert!(matches!(err, PersistError::Io { .. }));

        let entries: Vec<_> = fs::read_dir(tmp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("blocked.json")]);
    }
}
