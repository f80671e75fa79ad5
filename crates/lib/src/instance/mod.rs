//!
//! Provides the main service handle, [`Instance`].
//!
//! `Instance` owns the account table, the session registry and the
//! persistence gateway for one network. It is constructed explicitly with
//! [`Instance::open`], which loads the stored table, and persisted explicitly
//! with [`Instance::shutdown`]. Nothing is written to disk between those
//! checkpoints.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::{
    Result,
    account::{Account, Message},
    config::StorageConfig,
    persistence::PersistenceGateway,
    session::{SessionRegistry, SessionToken, errors::SessionError},
    store::{AccountStore, FriendRequestOutcome},
};

/// Internal state for Instance
///
/// Instance itself is just a cheap-to-clone handle wrapping `Arc<InstanceInternal>`.
#[derive(Debug)]
pub(crate) struct InstanceInternal {
    /// All accounts; the friendship handshake runs under its write lock
    store: RwLock<AccountStore>,
    /// Open sessions, never persisted
    sessions: RwLock<SessionRegistry>,
    /// Durable storage for `store`
    persistence: PersistenceGateway,
}

/// A running social network.
///
/// Every session-authenticated operation first resolves the token to a login
/// and then works on the account table. The two locks are never held at the
/// same time except by [`Instance::reset_all`], which takes the store lock
/// first.
///
/// ## Example
///
/// ```
/// # use amity::{Instance, StorageConfig};
/// # fn main() -> amity::Result<()> {
/// # let dir = tempfile::tempdir().unwrap();
/// let instance = Instance::open_in(StorageConfig::in_dir(dir.path()))?;
///
/// instance.create_account("ana", "p1", "Ana")?;
/// instance.create_account("bia", "p2", "Bia")?;
///
/// let ana = instance.open_session("ana", "p1")?;
/// let bia = instance.open_session("bia", "p2")?;
/// instance.request_friend(&ana, "bia")?;
/// instance.request_friend(&bia, "ana")?;
/// assert!(instance.is_friend("ana", "bia"));
///
/// instance.shutdown()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Instance {
    inner: Arc<InstanceInternal>,
}

impl Instance {
    /// Load the stored account table through `persistence` and start with no sessions.
    ///
    /// A missing storage file yields an empty network.
    pub fn open(persistence: PersistenceGateway) -> Result<Self> {
        let store = persistence.load()?;
        info!(
            dir = %persistence.config().data_dir().display(),
            accounts = store.len(),
            "Opened instance"
        );
        Ok(Self {
            inner: Arc::new(InstanceInternal {
                store: RwLock::new(store),
                sessions: RwLock::new(SessionRegistry::new()),
                persistence,
            }),
        })
    }

    /// Shorthand for [`Instance::open`] with a gateway built from `config`.
    pub fn open_in(config: StorageConfig) -> Result<Self> {
        Self::open(PersistenceGateway::new(config)?)
    }

    pub fn persistence(&self) -> &PersistenceGateway {
        &self.inner.persistence
    }

    // === Accounts ===

    /// Register a new account.
    pub fn create_account(&self, login: &str, password: &str, display_name: &str) -> Result<()> {
        let account = Account::new(login, password, display_name)?;
        self.store_write().register(account)?;
        info!(login = %login, "Created account");
        Ok(())
    }

    pub fn account_exists(&self, login: &str) -> bool {
        self.store_read().contains(login)
    }

    pub fn account_count(&self) -> usize {
        self.store_read().len()
    }

    /// Snapshot of every account, in unspecified order.
    pub fn accounts(&self) -> Vec<Account> {
        self.store_read().all()
    }

    /// Read a profile attribute of `login`. `"name"` reads the display name.
    pub fn attribute(&self, login: &str, name: &str) -> Result<String> {
        let store = self.store_read();
        let value = store.get(login)?.attribute(name)?;
        Ok(value.to_string())
    }

    // === Sessions ===

    /// Authenticate and open a new session.
    ///
    /// Unknown logins and wrong passwords both fail with
    /// [`SessionError::InvalidCredentials`].
    pub fn open_session(&self, login: &str, password: &str) -> Result<SessionToken> {
        let authenticated = self
            .store_read()
            .lookup(login)
            .is_some_and(|account| account.verify_password(password));
        if !authenticated {
            debug!(login = %login, "Rejected credentials");
            return Err(SessionError::InvalidCredentials.into());
        }
        let token = self.sessions_write().open(login);
        debug!(login = %login, "Opened session");
        Ok(token)
    }

    /// Login bound to `token`.
    pub fn session_login(&self, token: &str) -> Result<String> {
        Ok(self.sessions_read().resolve(token)?.to_string())
    }

    // === Profile ===

    /// Set (or, with a blank value, clear) an attribute on the session's own profile.
    pub fn edit_profile(&self, token: &str, name: &str, value: &str) -> Result<()> {
        let login = self.session_login(token)?;
        self.store_write()
            .get_mut(&login)?
            .set_attribute(name, value)?;
        debug!(login = %login, attribute = %name, "Edited profile");
        Ok(())
    }

    // === Friendship ===

    /// Send a friend request from the session's account to `peer`.
    ///
    /// Accepts `peer`'s earlier invite if there is one.
    pub fn request_friend(&self, token: &str, peer: &str) -> Result<FriendRequestOutcome> {
        let login = self.session_login(token)?;
        let outcome = self.store_write().request_friendship(&login, peer)?;
        if outcome == FriendRequestOutcome::Confirmed {
            info!(login = %login, peer = %peer, "Friendship established");
        }
        Ok(outcome)
    }

    /// Whether `login` has `peer` as a confirmed friend. Unknown accounts yield `false`.
    pub fn is_friend(&self, login: &str, peer: &str) -> bool {
        self.store_read().is_friend(login, peer)
    }

    /// Confirmed friends of `login` in confirmation order. Unknown accounts yield none.
    pub fn friends(&self, login: &str) -> Vec<String> {
        self.store_read()
            .lookup(login)
            .map(Account::ordered_friends)
            .unwrap_or_default()
    }

    // === Messages ===

    /// Deliver `body` from the session's account to `recipient`.
    pub fn send_message(&self, token: &str, recipient: &str, body: &str) -> Result<()> {
        let sender = self.session_login(token)?;
        self.store_write().deliver_message(&sender, recipient, body)
    }

    /// Consume the oldest unread message of the session's account.
    pub fn read_next_message(&self, token: &str) -> Result<Message> {
        let login = self.session_login(token)?;
        let message = self.store_write().get_mut(&login)?.read_next_message()?;
        debug!(login = %login, sender = %message.sender, "Message read");
        Ok(message)
    }

    /// Number of unread messages waiting for `login`.
    pub fn pending_messages(&self, login: &str) -> Result<usize> {
        Ok(self.store_read().get(login)?.inbox().len())
    }

    // === Lifecycle ===

    /// Remove every account and session and delete the stored files.
    ///
    /// The store stays write-locked until the files are gone, so a
    /// concurrent [`shutdown`](Self::shutdown) cannot save in between.
    pub fn reset_all(&self) -> Result<()> {
        let mut store = self.store_write();
        let mut sessions = self.sessions_write();
        store.clear();
        sessions.close_all();
        drop(sessions);
        self.inner.persistence.purge()?;
        drop(store);
        info!("Reset instance");
        Ok(())
    }

    /// Persist the account table. Sessions are not persisted.
    ///
    /// The instance stays usable afterwards; calling this again writes a new
    /// checkpoint.
    pub fn shutdown(&self) -> Result<()> {
        let store = self.store_read();
        self.inner.persistence.save(&store)?;
        info!(accounts = store.len(), "Instance state persisted");
        Ok(())
    }

    // === Lock helpers ===

    fn store_read(&self) -> RwLockReadGuard<'_, AccountStore> {
        self.inner
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn store_write(&self) -> RwLockWriteGuard<'_, AccountStore> {
        self.inner
            .store
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn sessions_read(&self) -> RwLockReadGuard<'_, SessionRegistry> {
        self.inner
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn sessions_write(&self) -> RwLockWriteGuard<'_, SessionRegistry> {
        self.inner
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
