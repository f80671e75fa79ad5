//! Accounts and their owned state
//!
//! An [`Account`] is a registered identity (login, password, display name)
//! that owns three sub-models:
//!
//! * [`ProfileAttributes`]: free-form profile key/value pairs
//! * [`FriendshipState`]: this account's side of each friendship
//! * [`MessageInbox`]: unread messages, oldest first
//!
//! Login and password are fixed at creation. Everything else is mutated in
//! place by the owning [`AccountStore`](crate::store::AccountStore).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NAME_ATTRIBUTE;

pub mod errors;
pub mod friendship;
pub mod inbox;
pub mod profile;

pub use errors::AccountError;
pub use friendship::{FriendshipState, Relation};
pub use inbox::{Message, MessageInbox};
pub use profile::ProfileAttributes;

/// A registered user of the network.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    login: String,
    password: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    attributes: ProfileAttributes,
    #[serde(default)]
    friendships: FriendshipState,
    #[serde(default)]
    inbox: MessageInbox,
}

impl Account {
    /// Create a new account.
    ///
    /// Fails with [`AccountError::InvalidLogin`] or
    /// [`AccountError::InvalidPassword`] when either credential is blank.
    /// The display name may be empty.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, AccountError> {
        let login = login.into();
        let password = password.into();
        if login.trim().is_empty() {
            return Err(AccountError::InvalidLogin);
        }
        if password.trim().is_empty() {
            return Err(AccountError::InvalidPassword);
        }
        Ok(Self {
            login,
            password,
            display_name: display_name.into(),
            attributes: ProfileAttributes::new(),
            friendships: FriendshipState::new(),
            inbox: MessageInbox::new(),
        })
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Plain comparison against the stored password.
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    // === Profile ===

    pub fn attributes(&self) -> &ProfileAttributes {
        &self.attributes
    }

    /// Read a profile attribute.
    ///
    /// `"name"` always resolves to the display name, even when it is empty.
    /// Any other attribute fails with [`AccountError::AttributeNotSet`] when absent.
    pub fn attribute(&self, name: &str) -> Result<&str, AccountError> {
        if name == NAME_ATTRIBUTE {
            return Ok(&self.display_name);
        }
        self.attributes
            .get(name)
            .ok_or_else(|| AccountError::AttributeNotSet {
                attribute: name.to_string(),
            })
    }

    /// Write a profile attribute; a blank value removes it.
    ///
    /// Writing `"name"` is rejected with [`AccountError::ReservedAttribute`].
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), AccountError> {
        if name == NAME_ATTRIBUTE {
            return Err(AccountError::ReservedAttribute {
                attribute: name.to_string(),
            });
        }
        self.attributes.set(name, value);
        Ok(())
    }

    // === Friendship ===

    pub fn friendships(&self) -> &FriendshipState {
        &self.friendships
    }

    pub(crate) fn friendships_mut(&mut self) -> &mut FriendshipState {
        &mut self.friendships
    }

    /// True iff this account's own state has `peer` as a confirmed friend.
    pub fn is_friend(&self, peer: &str) -> bool {
        self.friendships.is_confirmed(peer)
    }

    /// True iff this account has invited `peer` and is still waiting.
    pub fn has_invited(&self, peer: &str) -> bool {
        self.friendships.is_pending(peer)
    }

    /// Confirmed friends in the order the friendships were confirmed.
    pub fn ordered_friends(&self) -> Vec<String> {
        self.friendships.ordered_friends()
    }

    /// Check the rules that depend only on this account's own state
    /// before it sends a friend request to `peer`.
    pub(crate) fn check_friend_request(&self, peer: &str) -> Result<(), AccountError> {
        if peer == self.login {
            return Err(AccountError::SelfFriendship {
                login: self.login.clone(),
            });
        }
        match self.friendships.relation(peer) {
            Some(Relation::Confirmed) => Err(AccountError::AlreadyFriends {
                login: self.login.clone(),
                peer: peer.to_string(),
            }),
            Some(Relation::Pending) => Err(AccountError::FriendRequestPending {
                login: self.login.clone(),
                peer: peer.to_string(),
            }),
            None => Ok(()),
        }
    }

    // === Inbox ===

    pub fn inbox(&self) -> &MessageInbox {
        &self.inbox
    }

    /// Queue a message from `sender`.
    pub fn receive_message(&mut self, sender: &str, body: &str) -> Result<(), AccountError> {
        self.inbox.deliver(sender, body)
    }

    /// Pop the oldest unread message, or fail with [`AccountError::NoMessages`].
    pub fn read_next_message(&mut self) -> Result<Message, AccountError> {
        self.inbox
            .consume_next()
            .ok_or_else(|| AccountError::NoMessages {
                login: self.login.clone(),
            })
    }

    /// Re-check creation invariants on an account that did not come from [`Account::new`].
    pub(crate) fn validate(&self) -> Result<(), AccountError> {
        if self.login.trim().is_empty() {
            return Err(AccountError::InvalidLogin);
        }
        if self.password.trim().is_empty() {
            return Err(AccountError::InvalidPassword);
        }
        if self.friendships.mentions(&self.login) {
            return Err(AccountError::SelfFriendship {
                login: self.login.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("attributes", &self.attributes.len())
            .field("friends", &self.friendships.friend_count())
            .field("unread", &self.inbox.len())
            .finish()
    }
}
