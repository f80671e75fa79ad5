//! String-oriented boundary over an [`Instance`]
//!
//! [`Facade`] exposes the network's operations with plain string arguments
//! and reports every failure as a [`Rejected`] carrying a human-readable
//! reason. The categorized [`Error`] is still available from [`Instance`]
//! for callers that need to tell cases apart.

use std::fmt;

use thiserror::Error;

use crate::{
    Error, Instance,
    account::AccountError,
    config::StorageConfig,
    persistence::{PersistenceError, PersistenceOperation},
    session::SessionError,
    store::StoreError,
};

/// A refused request and the reason it was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct Rejected {
    reason: String,
}

impl Rejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Map a library error to the reason shown to callers.
    pub fn from_error(err: &Error) -> Self {
        let reason = match err {
            Error::Account(e) => match e {
                AccountError::InvalidLogin => "Invalid login.".to_string(),
                AccountError::InvalidPassword => "Invalid password.".to_string(),
                AccountError::AttributeNotSet { .. } => "Attribute not set.".to_string(),
                AccountError::ReservedAttribute { attribute } => {
                    format!("Attribute '{attribute}' cannot be edited.")
                }
                AccountError::SelfFriendship { .. } => {
                    "An account cannot add itself as a friend.".to_string()
                }
                AccountError::AlreadyFriends { .. } => "Account is already a friend.".to_string(),
                AccountError::FriendRequestPending { .. } => {
                    "Account is already a friend, waiting for the invite to be accepted."
                        .to_string()
                }
                AccountError::SelfMessage { .. } => {
                    "An account cannot send a message to itself.".to_string()
                }
                AccountError::EmptyMessage => "Message cannot be empty.".to_string(),
                AccountError::NoMessages { .. } => "No messages.".to_string(),
            },
            Error::Store(e) => match e {
                StoreError::AccountAlreadyExists { .. } => {
                    "An account with this login already exists.".to_string()
                }
                StoreError::AccountNotFound { .. } => "Account not registered.".to_string(),
            },
            Error::Session(e) => match e {
                SessionError::InvalidCredentials => "Invalid login or password.".to_string(),
                SessionError::InvalidSession => "Invalid session.".to_string(),
            },
            Error::Persistence(e) => persistence_reason(e),
        };
        Self { reason }
    }
}

impl From<Error> for Rejected {
    fn from(err: Error) -> Self {
        Rejected::from_error(&err)
    }
}

fn persistence_reason(err: &PersistenceError) -> String {
    let action = match err.operation() {
        PersistenceOperation::Open => "open",
        PersistenceOperation::Save => "save",
        PersistenceOperation::Load => "load",
        PersistenceOperation::Purge => "delete",
    };
    if let PersistenceError::InvalidConfig { reason } = err {
        return format!("Could not {action} stored data: {reason}.");
    }
    if err.is_corrupt_format() {
        return format!("Could not {action} stored data: corrupt format.");
    }
    match std::error::Error::source(err) {
        Some(cause) => format!("Could not {action} stored data: {cause}."),
        None => format!("Could not {action} stored data."),
    }
}

/// Confirmed friends of an account, rendered as `{a,b,c}`.
///
/// An account without friends renders as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FriendList(Vec<String>);

impl FriendList {
    pub fn logins(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for FriendList {
    fn from(logins: Vec<String>) -> Self {
        FriendList(logins)
    }
}

impl fmt::Display for FriendList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(","))
    }
}

/// Single entry point for callers that only need accept/reject semantics.
#[derive(Clone, Debug)]
pub struct Facade {
    instance: Instance,
}

impl Facade {
    pub fn new(instance: Instance) -> Self {
        Self { instance }
    }

    /// Open an [`Instance`] over `config` and wrap it.
    pub fn open(config: StorageConfig) -> Result<Self, Rejected> {
        Ok(Self::new(Instance::open_in(config)?))
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn create_account(
        &self,
        login: &str,
        password: &str,
        display_name: &str,
    ) -> Result<(), Rejected> {
        Ok(self.instance.create_account(login, password, display_name)?)
    }

    pub fn open_session(&self, login: &str, password: &str) -> Result<String, Rejected> {
        Ok(self.instance.open_session(login, password)?)
    }

    pub fn get_attribute(&self, login: &str, attribute: &str) -> Result<String, Rejected> {
        Ok(self.instance.attribute(login, attribute)?)
    }

    pub fn edit_profile(&self, session: &str, attribute: &str, value: &str) -> Result<(), Rejected> {
        Ok(self.instance.edit_profile(session, attribute, value)?)
    }

    /// Invite `peer`, or accept `peer`'s pending invite.
    pub fn request_friend(&self, session: &str, peer: &str) -> Result<(), Rejected> {
        self.instance.request_friend(session, peer)?;
        Ok(())
    }

    /// Never fails; unknown accounts are not friends with anyone.
    pub fn is_friend(&self, login: &str, peer: &str) -> bool {
        self.instance.is_friend(login, peer)
    }

    pub fn list_friends(&self, login: &str) -> FriendList {
        FriendList::from(self.instance.friends(login))
    }

    pub fn send_message(&self, session: &str, recipient: &str, body: &str) -> Result<(), Rejected> {
        Ok(self.instance.send_message(session, recipient, body)?)
    }

    /// Body of the oldest unread message.
    pub fn read_next_message(&self, session: &str) -> Result<String, Rejected> {
        Ok(self.instance.read_next_message(session)?.body)
    }

    pub fn reset_all(&self) -> Result<(), Rejected> {
        Ok(self.instance.reset_all()?)
    }

    pub fn shutdown(&self) -> Result<(), Rejected> {
        Ok(self.instance.shutdown()?)
    }
}
