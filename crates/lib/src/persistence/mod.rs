//! Durable storage of the account table
//!
//! [`PersistenceGateway`] saves, loads and purges an [`AccountStore`] as a
//! single JSON file with a one-generation backup next to it.
//!
//! A save proceeds as:
//!
//! 1. create the storage directory if needed
//! 2. encode the table (nothing on disk is touched if this fails)
//! 3. move the current primary file to the backup location, replacing any older backup
//! 4. write the new table to a staging file and move it into the primary location
//!
//! If step 4 fails the staging file is discarded and the backup is moved back.
//! Because the primary file only ever appears through a rename, it is either
//! absent or complete. A save interrupted between steps 3 and 4 leaves only
//! the backup, which [`PersistenceGateway::load`] falls back to.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::Path,
    sync::{Mutex, PoisonError},
};

use tracing::{debug, info, warn};

use crate::{Result, config::StorageConfig, store::AccountStore};

pub mod errors;
mod format;

pub use errors::{PersistenceError, PersistenceOperation};

/// Saves and loads the account table under a [`StorageConfig`].
///
/// Saves and purges are serialized by an internal lock so that two
/// backup-then-write cycles never interleave.
#[derive(Debug)]
pub struct PersistenceGateway {
    config: StorageConfig,
    write_lock: Mutex<()>,
}

impl PersistenceGateway {
    /// Create a gateway for `config`.
    ///
    /// Fails with [`PersistenceError::InvalidConfig`] unless the primary,
    /// backup and staging files are three distinct paths.
    pub fn new(config: StorageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            write_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Whether a primary file currently exists.
    pub fn primary_exists(&self) -> bool {
        self.config.primary_path().is_file()
    }

    /// Whether a backup file currently exists.
    pub fn backup_exists(&self) -> bool {
        self.config.backup_path().is_file()
    }

    /// Write `store` to the primary file, keeping the previous contents as backup.
    pub fn save(&self, store: &AccountStore) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let dir = self.config.data_dir();
        fs::create_dir_all(dir).map_err(|source| PersistenceError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let json = serde_json::to_string_pretty(store)
            .map_err(|source| PersistenceError::Serialize { source })?;

        let primary = self.config.primary_path();
        let backup = self.config.backup_path();
        let backed_up = match fs::rename(&primary, &backup) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(source) => {
                return Err(PersistenceError::Backup {
                    path: primary,
                    source,
                }
                .into());
            }
        };

        let staging = self.config.staging_path();
        if let Err(source) = write_then_rename(&staging, &primary, json.as_bytes()) {
            match fs::remove_file(&staging) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!(
                    path = %staging.display(),
                    error = %e,
                    "Save failed and staging file could not be removed"
                ),
            }
            if backed_up {
                match fs::rename(&backup, &primary) {
                    Ok(()) => warn!(path = %primary.display(), "Save failed, restored backup"),
                    Err(e) => warn!(
                        path = %primary.display(),
                        error = %e,
                        "Save failed and backup could not be restored"
                    ),
                }
            }
            return Err(PersistenceError::Write {
                path: primary,
                source,
            }
            .into());
        }

        info!(
            path = %primary.display(),
            accounts = store.len(),
            "Saved account table"
        );
        Ok(())
    }

    /// Read the account table.
    ///
    /// Returns an empty store when neither a primary nor a backup file exists.
    /// When only the backup exists (a save was interrupted after moving the
    /// primary aside), the backup is loaded instead.
    pub fn load(&self) -> Result<AccountStore> {
        let primary = self.config.primary_path();
        match read_store(&primary)? {
            Some(store) => {
                info!(path = %primary.display(), accounts = store.len(), "Loaded account table");
                Ok(store)
            }
            None => {
                let backup = self.config.backup_path();
                match read_store(&backup)? {
                    Some(store) => {
                        warn!(
                            path = %backup.display(),
                            accounts = store.len(),
                            "Primary file missing, loaded account table from backup"
                        );
                        Ok(store)
                    }
                    None => {
                        debug!(path = %primary.display(), "No stored account table, starting empty");
                        Ok(AccountStore::new())
                    }
                }
            }
        }
    }

    /// Delete the primary and backup files if present.
    ///
    /// Both deletions are attempted; the first failure is reported.
    pub fn purge(&self) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut first_error = None;
        for path in [
            self.config.primary_path(),
            self.config.backup_path(),
            self.config.staging_path(),
        ] {
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "Deleted stored file"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    warn!(path = %path.display(), error = %source, "Failed to delete stored file");
                    first_error.get_or_insert(PersistenceError::Purge { path, source });
                }
            }
        }

        match first_error {
            Some(err) => Err(err.into()),
            None => {
                info!(dir = %self.config.data_dir().display(), "Purged stored account table");
                Ok(())
            }
        }
    }
}

fn write_then_rename(staging: &Path, target: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(staging)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(staging, target)
}

/// Read and decode a stored table; `Ok(None)` if the file does not exist.
fn read_store(path: &Path) -> Result<Option<AccountStore>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistenceError::Read {
                path: path.to_path_buf(),
                source,
            }
            .into());
        }
    };
    let store = serde_json::from_str(&json).map_err(|e| PersistenceError::CorruptFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Some(store))
}
