//! Constants used throughout the Amity library.
//!
//! Central definitions for reserved attribute names and the default layout of
//! the durable storage directory.

/// Reserved profile attribute that always resolves to the account's display name.
pub const NAME_ATTRIBUTE: &str = "name";

/// Default directory holding the account table.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default file name of the primary account table.
pub const DEFAULT_DATA_FILE: &str = "amity.json";

/// Suffix appended to the primary file name to form the backup file name.
pub const BACKUP_SUFFIX: &str = "_bkp";

/// Suffix appended to the primary file name for the in-progress write.
pub const STAGING_SUFFIX: &str = ".tmp";
