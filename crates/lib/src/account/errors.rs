//! Error types for accounts and their owned sub-models
//!
//! Covers credential validation at creation, profile attribute access,
//! the friendship request rules and the message inbox.

use thiserror::Error;

/// Errors raised by an [`Account`](super::Account) or one of its sub-models.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Existing variants will not be removed in minor versions
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// Login was empty or blank.
    #[error("Invalid login")]
    InvalidLogin,

    /// Password was empty or blank.
    #[error("Invalid password")]
    InvalidPassword,

    /// Profile attribute has never been set, or was cleared.
    #[error("Attribute not set: {attribute}")]
    AttributeNotSet {
        /// The attribute that was requested
        attribute: String,
    },

    /// Attempted to write a reserved attribute through the generic path.
    #[error("Attribute is reserved and cannot be edited: {attribute}")]
    ReservedAttribute {
        /// The reserved attribute name
        attribute: String,
    },

    /// An account tried to befriend itself.
    #[error("Account cannot befriend itself: {login}")]
    SelfFriendship {
        /// The login that targeted itself
        login: String,
    },

    /// The two accounts are already confirmed friends.
    #[error("{login} is already friends with {peer}")]
    AlreadyFriends {
        /// The requesting account
        login: String,
        /// The peer that is already a friend
        peer: String,
    },

    /// The requester already has an outstanding invite to the peer.
    #[error("{login} already invited {peer}, waiting for acceptance")]
    FriendRequestPending {
        /// The requesting account
        login: String,
        /// The invited peer
        peer: String,
    },

    /// An account tried to send a message to itself.
    #[error("Account cannot send a message to itself: {login}")]
    SelfMessage {
        /// The login that targeted itself
        login: String,
    },

    /// Message body was empty or blank.
    #[error("Message body is empty")]
    EmptyMessage,

    /// The inbox has nothing left to read.
    #[error("No messages for {login}")]
    NoMessages {
        /// The account whose inbox is empty
        login: String,
    },
}

impl AccountError {
    /// Check if this error was caused by malformed caller input.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            AccountError::InvalidLogin
                | AccountError::InvalidPassword
                | AccountError::ReservedAttribute { .. }
                | AccountError::SelfFriendship { .. }
                | AccountError::SelfMessage { .. }
                | AccountError::EmptyMessage
        )
    }

    /// Check if this error indicates a missing value.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AccountError::AttributeNotSet { .. } | AccountError::NoMessages { .. }
        )
    }

    /// Check if this error is a friendship state conflict.
    pub fn is_friendship_conflict(&self) -> bool {
        matches!(
            self,
            AccountError::AlreadyFriends { .. } | AccountError::FriendRequestPending { .. }
        )
    }

    /// Get the login this error is about, if any.
    pub fn login(&self) -> Option<&str> {
        match self {
            AccountError::SelfFriendship { login }
            | AccountError::AlreadyFriends { login, .. }
            | AccountError::FriendRequestPending { login, .. }
            | AccountError::SelfMessage { login }
            | AccountError::NoMessages { login } => Some(login),
            _ => None,
        }
    }
}

impl From<AccountError> for crate::Error {
    fn from(err: AccountError) -> Self {
        crate::Error::Account(err)
    }
}
