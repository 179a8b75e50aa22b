/*
[INPUT]:  Storage failures (missing data, malformed data, I/O, bad keys)
[OUTPUT]: PersistError and crate Result alias
[POS]:    Error handling layer - persistence errors for the whole crate
[UPDATE]: When adding new storage failure modes
*/

use thiserror::Error;

/// Failure of a save or load against a [`crate::PersistenceStore`].
#[derive(Error, Debug)]
pub enum PersistError {
    /// Nothing has been saved under the key
    #[error("no saved list under key '{0}'")]
    NotFound(String),

    /// Stored data exists but cannot be decoded
    #[error("saved list '{key}' is unreadable: {reason}")]
    Corrupt { key: String, reason: String },

    /// Underlying storage failed
    #[error("storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Key cannot name a storage slot
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl PersistError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        PersistError::Io {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn corrupt(key: &str, reason: impl ToString) -> Self {
        PersistError::Corrupt {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistError::NotFound(_))
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, PersistError::Corrupt { .. })
    }

    /// Key the failed operation targeted.
    pub fn key(&self) -> &str {
        match self {
            PersistError::NotFound(key) | PersistError::InvalidKey(key) => key,
            PersistError::Corrupt { key, .. } | PersistError::Io { key, .. } => key,
        }
    }
}

/// Result type alias for persistence operations
pub type Result<T> = std::result::Result<T, PersistError>;
