//!
//! Amity: an in-process social network state manager.
//! This library provides the core components for running a small social network
//! and persisting its state to a single file.
//!
//! ## Core Concepts
//!
//! * **Accounts (`account::Account`)**: A registered identity that owns its profile
//!   attributes, its side of every friendship, and a FIFO inbox of unread messages.
//! * **AccountStore (`store::AccountStore`)**: The table of accounts keyed by login, and
//!   the unit of persistence. Runs the friendship handshake across two accounts.
//! * **Sessions (`session::SessionRegistry`)**: Ephemeral tokens bound to logins after
//!   authentication. Never persisted.
//! * **Persistence (`persistence::PersistenceGateway`)**: Saves and loads the account
//!   table as JSON with a single-generation backup and restore-on-failure.
//! * **Instance (`Instance`)**: The explicitly constructed service tying the above together.
//! * **Facade (`facade::Facade`)**: A string-oriented boundary reporting every failure as a
//!   uniform [`facade::Rejected`].
//!
//! ## Friendship handshake
//!
//! A friend request from A to B records a pending invite on A. When B later
//! requests A, both sides become confirmed in one step. There is no decline.

pub mod account;
pub mod config;
pub mod constants;
pub mod facade;
pub mod instance;
pub mod persistence;
pub mod session;
pub mod store;

pub use config::StorageConfig;
pub use facade::{Facade, FriendList, Rejected};
pub use instance::Instance;

/// Result type used throughout the Amity library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Amity library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured account errors from the account module
    #[error(transparent)]
    Account(account::AccountError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),

    /// Structured persistence errors from the persistence module
    #[error(transparent)]
    Persistence(persistence::PersistenceError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Account(_) => "account",
            Error::Store(_) => "store",
            Error::Session(_) => "session",
            Error::Persistence(_) => "persistence",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a conflict (already exists, already friends, already invited).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_already_exists(),
            Error::Account(account_err) => account_err.is_friendship_conflict(),
            _ => false,
        }
    }

    /// Check if this error was caused by malformed caller input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::Account(account_err) => account_err.is_validation_error(),
            _ => false,
        }
    }

    /// Check if this error is authentication-related.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_authentication_error(),
            _ => false,
        }
    }

    /// Check if this error came from durable storage.
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}
