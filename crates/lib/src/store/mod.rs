//! The account table
//!
//! [`AccountStore`] maps logins to [`Account`]s and is the unit of persistence.
//! Operations that touch two accounts at once (the friendship handshake and
//! message delivery) live here so both sides are updated under a single
//! `&mut self` borrow.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    Result,
    account::{Account, AccountError},
};

pub mod errors;

pub use errors::StoreError;

/// What a successful friend request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FriendRequestOutcome {
    /// A fresh one-way invite was recorded
    Invited,
    /// The peer had already invited the requester; both sides are now confirmed
    Confirmed,
}

/// All registered accounts, keyed by login.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountStore {
    pub(crate) accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account.
    ///
    /// Fails with [`StoreError::AccountAlreadyExists`] if the login is taken.
    pub fn register(&mut self, account: Account) -> Result<()> {
        if self.accounts.contains_key(account.login()) {
            return Err(StoreError::AccountAlreadyExists {
                login: account.login().to_string(),
            }
            .into());
        }
        self.accounts.insert(account.login().to_string(), account);
        Ok(())
    }

    /// Look up an account. Absence is not an error at this level.
    pub fn lookup(&self, login: &str) -> Option<&Account> {
        self.accounts.get(login)
    }

    pub fn lookup_mut(&mut self, login: &str) -> Option<&mut Account> {
        self.accounts.get_mut(login)
    }

    /// Look up an account, failing with [`StoreError::AccountNotFound`].
    pub fn get(&self, login: &str) -> Result<&Account> {
        self.lookup(login).ok_or_else(|| not_found(login))
    }

    /// Mutable variant of [`AccountStore::get`].
    pub fn get_mut(&mut self, login: &str) -> Result<&mut Account> {
        self.accounts.get_mut(login).ok_or_else(|| not_found(login))
    }

    pub fn contains(&self, login: &str) -> bool {
        self.accounts.contains_key(login)
    }

    /// Snapshot of every account, in unspecified order.
    pub fn all(&self) -> Vec<Account> {
        self.accounts.values().cloned().collect()
    }

    /// Registered logins, sorted.
    pub fn logins(&self) -> Vec<String> {
        let mut logins: Vec<String> = self.accounts.keys().cloned().collect();
        logins.sort();
        logins
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Remove every account.
    pub fn clear(&mut self) {
        self.accounts.clear();
    }

    /// Send a friend request from `from` to `to`.
    ///
    /// Checks, in order: self-targeting, unknown peer, unknown requester,
    /// already confirmed, already pending. If `to` had previously invited
    /// `from`, the request is an acceptance and both sides become confirmed
    /// together, each appending the other to its friend order. Otherwise a
    /// pending invite is recorded on `from` only.
    pub fn request_friendship(&mut self, from: &str, to: &str) -> Result<FriendRequestOutcome> {
        if from == to {
            return Err(AccountError::SelfFriendship {
                login: from.to_string(),
            }
            .into());
        }
        let peer_invited_us = self.get(to)?.has_invited(from);
        self.get(from)?.check_friend_request(to)?;

        if peer_invited_us {
            self.get_mut(from)?.friendships_mut().confirm(to);
            self.get_mut(to)?.friendships_mut().confirm(from);
            debug!(login = %from, peer = %to, "Friendship confirmed");
            Ok(FriendRequestOutcome::Confirmed)
        } else {
            self.get_mut(from)?.friendships_mut().invite(to);
            debug!(login = %from, peer = %to, "Friend invite recorded");
            Ok(FriendRequestOutcome::Invited)
        }
    }

    /// True iff `login` exists and its own state has `peer` confirmed.
    pub fn is_friend(&self, login: &str, peer: &str) -> bool {
        self.lookup(login)
            .is_some_and(|account| account.is_friend(peer))
    }

    /// Queue `body` in the inbox of `recipient`.
    ///
    /// Fails with [`AccountError::SelfMessage`] when sender and recipient
    /// match, [`StoreError::AccountNotFound`] for an unknown recipient, and
    /// [`AccountError::EmptyMessage`] for a blank body.
    pub fn deliver_message(&mut self, sender: &str, recipient: &str, body: &str) -> Result<()> {
        if sender == recipient {
            return Err(AccountError::SelfMessage {
                login: sender.to_string(),
            }
            .into());
        }
        self.get_mut(recipient)?.receive_message(sender, body)?;
        debug!(sender = %sender, recipient = %recipient, "Message delivered");
        Ok(())
    }
}

fn not_found(login: &str) -> crate::Error {
    StoreError::AccountNotFound {
        login: login.to_string(),
    }
    .into()
}
