//! Error types for the account store

use thiserror::Error;

/// Errors that can occur during account store operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// An account with this login is already registered.
    #[error("Account already exists: {login}")]
    AccountAlreadyExists {
        /// The duplicate login
        login: String,
    },

    /// No account is registered under this login.
    #[error("Account not found: {login}")]
    AccountNotFound {
        /// The login that was looked up
        login: String,
    },
}

impl StoreError {
    /// Check if this error indicates an account was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::AccountNotFound { .. })
    }

    /// Check if this error indicates an account already exists.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, StoreError::AccountAlreadyExists { .. })
    }

    /// Get the login this error is about.
    pub fn login(&self) -> &str {
        match self {
            StoreError::AccountAlreadyExists { login } | StoreError::AccountNotFound { login } => {
                login
            }
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
