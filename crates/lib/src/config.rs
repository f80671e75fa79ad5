//! Storage configuration
//!
//! [`StorageConfig`] names the directory and files used by the
//! [`PersistenceGateway`](crate::persistence::PersistenceGateway).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{BACKUP_SUFFIX, DEFAULT_DATA_DIR, DEFAULT_DATA_FILE, STAGING_SUFFIX},
    persistence::PersistenceError,
};

/// Location of the durable account table.
///
/// The primary file and its single-generation backup live side by side in
/// `data_dir`. The directory is created lazily on the first save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the primary, backup and staging files
    pub data_dir: PathBuf,
    /// File name of the primary account table
    pub file_name: String,
    /// Suffix appended to `file_name` for the backup copy
    pub backup_suffix: String,
}

impl StorageConfig {
    /// Config rooted at `data_dir` with the default file names.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Override the primary file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of the primary file.
    pub fn primary_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Full path of the backup file.
    pub fn backup_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", self.file_name, self.backup_suffix))
    }

    /// Full path of the file a save writes before moving it into place.
    pub fn staging_path(&self) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", self.file_name, STAGING_SUFFIX))
    }

    /// Check that the primary, backup and staging files are three distinct paths.
    ///
    /// A save moves the primary onto the backup and then writes the staging
    /// file, so any overlap would destroy the only previous copy.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        if self.file_name.trim().is_empty() {
            return Err(PersistenceError::InvalidConfig {
                reason: "file name is empty".to_string(),
            });
        }

        let primary = self.primary_path();
        let backup = self.backup_path();
        let staging = self.staging_path();
        let collision = if primary == backup {
            Some(("primary", "backup", &primary))
        } else if primary == staging {
            Some(("primary", "staging", &primary))
        } else if backup == staging {
            Some(("backup", "staging", &backup))
        } else {
            None
        };

        match collision {
            Some((a, b, path)) => Err(PersistenceError::InvalidConfig {
                reason: format!("{a} and {b} files are both {}", path.display()),
            }),
            None => Ok(()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: DEFAULT_DATA_FILE.to_string(),
            backup_suffix: BACKUP_SUFFIX.to_string(),
        }
    }
}
