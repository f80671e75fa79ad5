//! Error types for durable storage of the account table

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Which gateway operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersistenceOperation {
    Open,
    Save,
    Load,
    Purge,
}

impl fmt::Display for PersistenceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PersistenceOperation::Open => "open",
            PersistenceOperation::Save => "save",
            PersistenceOperation::Load => "load",
            PersistenceOperation::Purge => "purge",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while saving, loading or purging the account table.
///
/// Every variant belongs to exactly one [`PersistenceOperation`], available
/// through [`PersistenceError::operation`].
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage config maps two of the primary, backup and staging
    /// files onto the same path.
    #[error("Invalid storage config: {reason}")]
    InvalidConfig {
        /// Which paths collide
        reason: String,
    },

    /// The storage directory could not be created.
    #[error("Failed to create storage directory {}", path.display())]
    CreateDir {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The existing primary file could not be moved to the backup location.
    #[error("Failed to back up {}", path.display())]
    Backup {
        /// The primary file that could not be moved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The account table could not be encoded.
    #[error("Failed to serialize account table")]
    Serialize {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Writing the new primary file failed.
    #[error("Failed to write {}", path.display())]
    Write {
        /// The file being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading a stored file failed for a reason other than absence.
    #[error("Failed to read {}", path.display())]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A stored file does not hold a valid account table.
    #[error("Corrupt format in {}: {reason}", path.display())]
    CorruptFormat {
        /// The file being read
        path: PathBuf,
        /// What was wrong with the contents
        reason: String,
    },

    /// A stored file exists but could not be deleted.
    #[error("Failed to delete {}", path.display())]
    Purge {
        /// The file that could not be deleted
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl PersistenceError {
    /// The gateway operation this error was raised by.
    pub fn operation(&self) -> PersistenceOperation {
        match self {
            PersistenceError::InvalidConfig { .. } => PersistenceOperation::Open,
            PersistenceError::CreateDir { .. }
            | PersistenceError::Backup { .. }
            | PersistenceError::Serialize { .. }
            | PersistenceError::Write { .. } => PersistenceOperation::Save,
            PersistenceError::Read { .. } | PersistenceError::CorruptFormat { .. } => {
                PersistenceOperation::Load
            }
            PersistenceError::Purge { .. } => PersistenceOperation::Purge,
        }
    }

    /// Check if this error comes from an unusable [`StorageConfig`](crate::StorageConfig).
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, PersistenceError::InvalidConfig { .. })
    }

    /// Check if this error indicates unreadable stored contents.
    pub fn is_corrupt_format(&self) -> bool {
        matches!(self, PersistenceError::CorruptFormat { .. })
    }

    /// Get the file or directory this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PersistenceError::CreateDir { path, .. }
            | PersistenceError::Backup { path, .. }
            | PersistenceError::Write { path, .. }
            | PersistenceError::Read { path, .. }
            | PersistenceError::CorruptFormat { path, .. }
            | PersistenceError::Purge { path, .. } => Some(path),
            PersistenceError::InvalidConfig { .. } | PersistenceError::Serialize { .. } => None,
        }
    }
}

impl From<PersistenceError> for crate::Error {
    fn from(err: PersistenceError) -> Self {
        crate::Error::Persistence(err)
    }
}
